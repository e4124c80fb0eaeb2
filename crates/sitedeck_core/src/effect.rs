use crate::{Site, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the persisted registry with this full list.
    PersistSites(Vec<Site>),
    /// The registry became empty: drop the persisted entry entirely.
    ClearPersistedSites,
    /// Add flow succeeded; the site is already active.
    SiteAdded(Site),
    /// Add flow failed; nothing changed besides the form error.
    AddRejected(ValidationError),
}
