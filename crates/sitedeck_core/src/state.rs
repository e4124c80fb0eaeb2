use sitedeck_logging::deck_info;

use crate::view_model::{AppViewModel, SiteRowView};
use crate::{Registry, Site, SiteDraft, SiteId, SiteStamp, ValidationError, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    registry: Registry,
    view: ViewState,
    add_error: Option<ValidationError>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn sites(&self) -> &[Site] {
        self.registry.sites()
    }

    pub fn active_site(&self) -> Option<&Site> {
        self.view.active_site(&self.registry)
    }

    pub fn add_error(&self) -> Option<&ValidationError> {
        self.add_error.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let active = self.view.active_id().cloned();
        let sites = self
            .registry
            .sites()
            .iter()
            .map(|site| SiteRowView {
                id: site.id.clone(),
                name: site.name.clone(),
                url: site.url.clone(),
                initial: site.name.chars().next().map(|c| c.to_uppercase().collect()),
                is_active: active.as_ref() == Some(&site.id),
            })
            .collect();

        AppViewModel {
            sites,
            active_name: self.active_site().map(|site| site.name.clone()),
            active,
            frame: self.view.frame(&self.registry),
            reload_token: self.view.reload_token(),
            add_error: self.add_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn restore(&mut self, sites: Vec<Site>) {
        self.registry = Registry::from_sites(sites);
        self.view = ViewState::new();
        self.view.select_first(&self.registry);
        self.add_error = None;
        self.dirty = true;
    }

    /// Append the site and make it active in one step.
    pub(crate) fn add_and_select(&mut self, draft: SiteDraft, stamp: SiteStamp) -> Site {
        let site = self.registry.append(draft, stamp);
        self.view.select(&self.registry, &site.id);
        self.add_error = None;
        self.dirty = true;
        deck_info!("Added site {} ({}) as {}", site.name, site.url, site.id);
        site
    }

    pub(crate) fn reject_add(&mut self, error: ValidationError) {
        self.add_error = Some(error);
        self.dirty = true;
    }

    pub(crate) fn clear_add_error(&mut self) {
        if self.add_error.take().is_some() {
            self.dirty = true;
        }
    }

    /// Remove the site and repair the active selection before returning.
    pub(crate) fn delete(&mut self, id: &SiteId) -> Option<Site> {
        let removed = self.registry.remove(id)?;
        self.view.on_site_deleted(id, &self.registry);
        self.dirty = true;
        deck_info!(
            "Deleted site {} ({}); {} remaining",
            removed.name,
            removed.id,
            self.registry.len()
        );
        Some(removed)
    }

    pub(crate) fn select(&mut self, id: &SiteId) {
        if self.view.select(&self.registry, id) {
            self.dirty = true;
        }
    }

    pub(crate) fn refresh(&mut self) {
        self.view.refresh();
        self.dirty = true;
    }
}
