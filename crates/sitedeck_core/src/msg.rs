use crate::{Site, SiteId, SiteStamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Registry content read at startup (stored list or defaults).
    SitesRestored(Vec<Site>),
    /// User opened the add-site form.
    AddFormOpened,
    /// User submitted the add-site form.
    AddSubmitted {
        name: String,
        url: String,
        stamp: SiteStamp,
    },
    /// User confirmed deletion of a site.
    DeleteConfirmed(SiteId),
    /// User picked a site in the sidebar.
    SiteSelected(SiteId),
    /// User asked the viewer to reload the active site.
    RefreshClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
