use crate::{SiteId, ValidationError, ViewerFrame};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub sites: Vec<SiteRowView>,
    pub active: Option<SiteId>,
    pub active_name: Option<String>,
    pub frame: Option<ViewerFrame>,
    pub reload_token: u64,
    pub add_error: Option<ValidationError>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRowView {
    pub id: SiteId,
    pub name: String,
    pub url: String,
    /// Upper-cased first letter of the name, for the sidebar badge.
    pub initial: Option<String>,
    pub is_active: bool,
}
