use sitedeck_logging::deck_warn;

use crate::{Site, SiteDraft, SiteId, SiteStamp};

/// Ordered collection of sites with unique ids, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    sites: Vec<Site>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a loaded list. Later entries reusing an id are dropped.
    pub fn from_sites(sites: Vec<Site>) -> Self {
        let mut registry = Self::new();
        for site in sites {
            if registry.contains(&site.id) {
                deck_warn!("Dropping site {:?} with duplicate id {}", site.name, site.id);
                continue;
            }
            registry.sites.push(site);
        }
        registry
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, id: &SiteId) -> Option<&Site> {
        self.sites.iter().find(|site| &site.id == id)
    }

    pub fn contains(&self, id: &SiteId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&Site> {
        self.sites.first()
    }

    /// Zero-based display position of a site.
    pub fn position(&self, id: &SiteId) -> Option<usize> {
        self.sites.iter().position(|site| &site.id == id)
    }

    /// Append a validated draft. A stamp id already in use gets a numeric
    /// suffix so ids stay unique.
    pub(crate) fn append(&mut self, draft: SiteDraft, stamp: SiteStamp) -> Site {
        let id = self.unused_id(stamp.id);
        let site = Site {
            id,
            name: draft.name,
            url: draft.url,
            added_at: stamp.added_at,
        };
        self.sites.push(site.clone());
        site
    }

    pub(crate) fn remove(&mut self, id: &SiteId) -> Option<Site> {
        let index = self.position(id)?;
        Some(self.sites.remove(index))
    }

    fn unused_id(&self, candidate: SiteId) -> SiteId {
        if !self.contains(&candidate) {
            return candidate;
        }
        let base = candidate.as_str().to_owned();
        (2u64..)
            .map(|n| SiteId::new(format!("{base}-{n}")))
            .find(|id| !self.contains(id))
            .unwrap_or(candidate)
    }
}
