use sitedeck_logging::deck_debug;

use crate::{Registry, Site, SiteId};

/// Everything the embedded viewer receives for the active site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerFrame {
    pub site_id: SiteId,
    pub url: String,
    pub reload_token: u64,
}

impl ViewerFrame {
    /// Identity of the loaded content. A viewer discards what it shows and
    /// fetches `url` again whenever this key changes.
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.site_id, self.reload_token)
    }
}

/// Transient selection state: which site is shown and its reload counter.
///
/// `active` is a weak reference into a [`Registry`]; it is either `None` or
/// the id of a site the registry currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    active: Option<SiteId>,
    reload_token: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&SiteId> {
        self.active.as_ref()
    }

    pub fn reload_token(&self) -> u64 {
        self.reload_token
    }

    pub fn active_site<'a>(&self, registry: &'a Registry) -> Option<&'a Site> {
        self.active.as_ref().and_then(|id| registry.get(id))
    }

    pub fn frame(&self, registry: &Registry) -> Option<ViewerFrame> {
        self.active_site(registry).map(|site| ViewerFrame {
            site_id: site.id.clone(),
            url: site.url.clone(),
            reload_token: self.reload_token,
        })
    }

    /// Make `id` active. Ids the registry does not hold are ignored.
    /// Returns whether the active site changed.
    pub fn select(&mut self, registry: &Registry, id: &SiteId) -> bool {
        if !registry.contains(id) {
            deck_debug!("Ignoring selection of unknown site id {}", id);
            return false;
        }
        if self.active.as_ref() == Some(id) {
            return false;
        }
        self.active = Some(id.clone());
        true
    }

    pub(crate) fn select_first(&mut self, registry: &Registry) {
        self.active = registry.first().map(|site| site.id.clone());
    }

    /// Repair the selection after `deleted` left the registry.
    pub fn on_site_deleted(&mut self, deleted: &SiteId, remaining: &Registry) {
        if self.active.as_ref() == Some(deleted) {
            self.select_first(remaining);
        }
    }

    /// Bump the reload token without touching the selection.
    pub fn refresh(&mut self) {
        self.reload_token = self.reload_token.saturating_add(1);
    }
}
