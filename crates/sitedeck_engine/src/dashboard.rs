use std::sync::Arc;

use chrono::Utc;
use sitedeck_core::{
    update, AppState, AppViewModel, Effect, Msg, Site, SiteId, SiteStamp, ValidationError,
    ViewerFrame,
};
use uuid::Uuid;

use crate::kv::KeyValueStore;
use crate::registry_store::{LoadSource, RegistryStore};

/// Clock and id source used by the add flow.
#[derive(Clone)]
pub struct DashboardConfig {
    /// Current time in epoch milliseconds.
    pub now_millis: Arc<dyn Fn() -> i64 + Send + Sync>,
    /// Candidate id for a new site.
    pub next_id: Arc<dyn Fn() -> SiteId + Send + Sync>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            now_millis: Arc::new(|| Utc::now().timestamp_millis()),
            next_id: Arc::new(|| SiteId::new(Uuid::new_v4().to_string())),
        }
    }
}

/// Presentation-facing entry point: owns the state and its persistence.
///
/// Every call dispatches one message and executes the resulting writes
/// before returning, so memory and store agree between calls.
pub struct Dashboard<S: KeyValueStore> {
    state: AppState,
    store: RegistryStore<S>,
    config: DashboardConfig,
    load_source: LoadSource,
}

impl<S: KeyValueStore> Dashboard<S> {
    pub fn load(store: S) -> Self {
        Self::load_with(RegistryStore::new(store), DashboardConfig::default())
    }

    pub fn load_with(store: RegistryStore<S>, config: DashboardConfig) -> Self {
        let outcome = store.load((config.now_millis)());
        let mut dashboard = Self {
            state: AppState::new(),
            store,
            config,
            load_source: outcome.source,
        };
        dashboard.dispatch(Msg::SitesRestored(outcome.sites));
        dashboard
    }

    /// Validate, append, persist and select the new site.
    pub fn add(&mut self, name: &str, url: &str) -> Result<Site, ValidationError> {
        let stamp = SiteStamp {
            id: (self.config.next_id)(),
            added_at: (self.config.now_millis)(),
        };
        let effects = self.dispatch(Msg::AddSubmitted {
            name: name.to_string(),
            url: url.to_string(),
            stamp,
        });
        effects
            .into_iter()
            .find_map(|effect| match effect {
                Effect::SiteAdded(site) => Some(Ok(site)),
                Effect::AddRejected(err) => Some(Err(err)),
                _ => None,
            })
            // `update` reports an outcome for every submission.
            .unwrap_or_else(|| Err(ValidationError::InvalidUrl(url.to_string())))
    }

    /// Remove a site; the caller has already confirmed. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &SiteId) -> &[Site] {
        self.dispatch(Msg::DeleteConfirmed(id.clone()));
        self.state.sites()
    }

    pub fn select_site(&mut self, id: &SiteId) {
        self.dispatch(Msg::SiteSelected(id.clone()));
    }

    pub fn refresh(&mut self) {
        self.dispatch(Msg::RefreshClicked);
    }

    pub fn open_add_form(&mut self) {
        self.dispatch(Msg::AddFormOpened);
    }

    pub fn sites(&self) -> &[Site] {
        self.state.sites()
    }

    pub fn active_site(&self) -> Option<&Site> {
        self.state.active_site()
    }

    pub fn reload_token(&self) -> u64 {
        self.state.view_state().reload_token()
    }

    pub fn viewer_frame(&self) -> Option<ViewerFrame> {
        self.state.view_state().frame(self.state.registry())
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn store(&self) -> &S {
        self.store.store()
    }

    /// Run one message through `update`, execute persistence effects, and hand
    /// back the rest.
    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistSites(sites) => self.store.persist(&sites),
                Effect::ClearPersistedSites => self.store.clear(),
                other => remaining.push(other),
            }
        }
        remaining
    }
}
