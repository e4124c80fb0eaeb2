use crate::{validate_site_input, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SitesRestored(sites) => {
            // Restored data is already persisted (or is the first-run default); no write.
            state.restore(sites);
            Vec::new()
        }
        Msg::AddFormOpened => {
            state.clear_add_error();
            Vec::new()
        }
        Msg::AddSubmitted { name, url, stamp } => match validate_site_input(&name, &url) {
            Ok(draft) => {
                let site = state.add_and_select(draft, stamp);
                vec![
                    Effect::PersistSites(state.sites().to_vec()),
                    Effect::SiteAdded(site),
                ]
            }
            Err(err) => {
                state.reject_add(err.clone());
                vec![Effect::AddRejected(err)]
            }
        },
        Msg::DeleteConfirmed(id) => match state.delete(&id) {
            Some(_) if state.registry().is_empty() => vec![Effect::ClearPersistedSites],
            Some(_) => vec![Effect::PersistSites(state.sites().to_vec())],
            None => Vec::new(),
        },
        Msg::SiteSelected(id) => {
            state.select(&id);
            Vec::new()
        }
        Msg::RefreshClicked => {
            state.refresh();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
