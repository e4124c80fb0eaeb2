use pretty_assertions::assert_eq;
use sitedeck_core::{
    default_sites, update, AppState, Effect, Field, Msg, Site, SiteId, SiteStamp, ValidationError,
};

fn init_logging() {
    sitedeck_logging::initialize_for_tests();
}

fn restored_defaults() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::SitesRestored(default_sites(1_000)));
    assert!(effects.is_empty());
    state
}

fn add(state: AppState, name: &str, url: &str, id: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::AddSubmitted {
            name: name.to_string(),
            url: url.to_string(),
            stamp: SiteStamp {
                id: SiteId::new(id),
                added_at: 2_000,
            },
        },
    )
}

fn ids(state: &AppState) -> Vec<String> {
    state
        .sites()
        .iter()
        .map(|site| site.id.as_str().to_string())
        .collect()
}

#[test]
fn restoring_defaults_selects_first_with_token_zero() {
    init_logging();
    let mut state = restored_defaults();
    let view = state.view();

    assert_eq!(view.sites.len(), 2);
    assert_eq!(view.active, Some(SiteId::new("1")));
    assert_eq!(view.active_name.as_deref(), Some("Rand'eau Vive"));
    assert_eq!(view.reload_token, 0);
    assert!(view.sites[0].is_active);
    assert!(!view.sites[1].is_active);
    assert_eq!(view.sites[1].initial.as_deref(), Some("T"));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn restoring_empty_list_leaves_nothing_active() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SitesRestored(Vec::new()));
    assert!(state.sites().is_empty());
    assert_eq!(state.view().active, None);
    assert_eq!(state.view().frame, None);
}

#[test]
fn add_appends_selects_and_persists() {
    init_logging();
    let (state, effects) = add(restored_defaults(), "Docs", "docs.example.org", "abc");

    let expected = Site {
        id: SiteId::new("abc"),
        name: "Docs".to_string(),
        url: "https://docs.example.org".to_string(),
        added_at: 2_000,
    };
    assert_eq!(ids(&state), vec!["1", "2", "abc"]);
    assert_eq!(state.active_site(), Some(&expected));
    assert_eq!(
        effects,
        vec![
            Effect::PersistSites(state.sites().to_vec()),
            Effect::SiteAdded(expected),
        ]
    );
}

#[test]
fn add_with_colliding_stamp_still_yields_unique_id() {
    init_logging();
    let (state, effects) = add(restored_defaults(), "Again", "again.example", "1");

    let added = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SiteAdded(site) => Some(site.clone()),
            _ => None,
        })
        .expect("site added");
    assert_ne!(added.id, SiteId::new("1"));
    assert_eq!(state.view().active, Some(added.id));

    let mut all = ids(&state);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 3);
}

#[test]
fn rejected_add_changes_nothing_but_the_form_error() {
    init_logging();
    let before = restored_defaults();

    let (after, effects) = add(before.clone(), "", "example.com", "x");
    assert_eq!(
        effects,
        vec![Effect::AddRejected(ValidationError::MissingField(
            Field::Name
        ))]
    );
    assert_eq!(after.sites(), before.sites());
    assert_eq!(after.view().active, before.view().active);
    assert_eq!(
        after.view().add_error,
        Some(ValidationError::MissingField(Field::Name))
    );

    let (after, effects) = add(after, "Bad", "has spaces in it", "x");
    assert!(matches!(
        effects.as_slice(),
        [Effect::AddRejected(ValidationError::InvalidUrl(_))]
    ));
    assert_eq!(after.sites(), before.sites());

    let (after, effects) = update(after, Msg::AddFormOpened);
    assert!(effects.is_empty());
    assert_eq!(after.add_error(), None);
}

#[test]
fn successful_add_clears_previous_form_error() {
    init_logging();
    let (state, _) = add(restored_defaults(), "", "", "x");
    assert!(state.add_error().is_some());

    let (state, _) = add(state, "Ok", "ok.example", "y");
    assert_eq!(state.add_error(), None);
}

#[test]
fn deleting_active_site_selects_first_remaining() {
    init_logging();
    let (state, _) = add(restored_defaults(), "Docs", "docs.example.org", "abc");
    let (state, _) = update(state, Msg::SiteSelected(SiteId::new("2")));

    let (state, effects) = update(state, Msg::DeleteConfirmed(SiteId::new("2")));

    assert_eq!(ids(&state), vec!["1", "abc"]);
    assert_eq!(state.view().active, Some(SiteId::new("1")));
    assert_eq!(effects, vec![Effect::PersistSites(state.sites().to_vec())]);
}

#[test]
fn deleting_inactive_site_keeps_selection() {
    init_logging();
    let (state, _) = add(restored_defaults(), "Docs", "docs.example.org", "abc");

    let (state, _) = update(state, Msg::DeleteConfirmed(SiteId::new("1")));

    assert_eq!(ids(&state), vec!["2", "abc"]);
    assert_eq!(state.view().active, Some(SiteId::new("abc")));
}

#[test]
fn deleting_last_site_clears_selection_and_persistence() {
    init_logging();
    let state = restored_defaults();
    let (state, _) = update(state, Msg::DeleteConfirmed(SiteId::new("1")));
    let (state, effects) = update(state, Msg::DeleteConfirmed(SiteId::new("2")));

    assert!(state.sites().is_empty());
    assert_eq!(state.view().active, None);
    assert_eq!(state.view().frame, None);
    assert_eq!(effects, vec![Effect::ClearPersistedSites]);
}

#[test]
fn deleting_twice_is_idempotent() {
    init_logging();
    let (mut state, first) = update(restored_defaults(), Msg::DeleteConfirmed(SiteId::new("2")));
    assert_eq!(first.len(), 1);
    assert!(state.consume_dirty());

    let (mut again, second) = update(state.clone(), Msg::DeleteConfirmed(SiteId::new("2")));
    assert!(second.is_empty());
    assert_eq!(again.sites(), state.sites());
    assert!(!again.consume_dirty());
}

#[test]
fn selecting_unknown_id_is_ignored() {
    init_logging();
    let mut state = restored_defaults();
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::SiteSelected(SiteId::new("ghost")));

    assert!(effects.is_empty());
    assert_eq!(next.view().active, Some(SiteId::new("1")));
    assert!(!next.consume_dirty());
}

#[test]
fn refresh_counts_up_without_changing_selection() {
    init_logging();
    let (mut state, _) = update(restored_defaults(), Msg::SiteSelected(SiteId::new("2")));
    let n = 7;
    for _ in 0..n {
        let (next, effects) = update(state, Msg::RefreshClicked);
        assert!(effects.is_empty());
        state = next;
    }

    let view = state.view();
    assert_eq!(view.reload_token, n);
    assert_eq!(view.active, Some(SiteId::new("2")));
    let frame = view.frame.expect("active frame");
    assert_eq!(frame.url, "https://traildeslucioles.fr");
    assert_eq!(frame.cache_key(), "2-7");
}

#[test]
fn reselecting_active_site_keeps_frame_key() {
    init_logging();
    let state = restored_defaults();
    let before = state.view().frame.expect("frame").cache_key();

    let (state, _) = update(state, Msg::SiteSelected(SiteId::new("1")));
    assert_eq!(state.view().frame.expect("frame").cache_key(), before);
}
