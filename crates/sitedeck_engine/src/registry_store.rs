use sitedeck_core::{default_sites, Site};
use sitedeck_logging::{deck_error, deck_info, deck_warn};

use crate::codec::{decode_sites, encode_sites};
use crate::kv::KeyValueStore;

/// Key the site list lives under.
pub const SITES_KEY: &str = "my_app_sites_v1";

/// Where the sites produced by [`RegistryStore::load`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The persisted list.
    Stored,
    /// Nothing persisted yet; built-in defaults.
    FirstRun,
    /// Persisted data was unreadable or malformed; built-in defaults.
    Recovered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub sites: Vec<Site>,
    pub source: LoadSource,
}

/// Reads and writes the registry through a [`KeyValueStore`].
///
/// Write failures are logged and swallowed: the in-memory registry stays
/// authoritative for the running session.
pub struct RegistryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RegistryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SITES_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the persisted list, falling back to defaults. Never writes.
    pub fn load(&self, now_millis: i64) -> LoadOutcome {
        let text = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                deck_info!("No persisted sites under {:?}; using defaults", self.key);
                return LoadOutcome {
                    sites: default_sites(now_millis),
                    source: LoadSource::FirstRun,
                };
            }
            Err(err) => {
                deck_warn!("Failed to read persisted sites under {:?}: {}", self.key, err);
                return recovered(now_millis);
            }
        };

        match decode_sites(&text) {
            Ok(sites) => {
                deck_info!("Loaded {} persisted sites", sites.len());
                LoadOutcome {
                    sites,
                    source: LoadSource::Stored,
                }
            }
            Err(err) => {
                deck_warn!("Failed to parse persisted sites under {:?}: {}", self.key, err);
                recovered(now_millis)
            }
        }
    }

    /// Overwrite the persisted list. An empty list clears the key instead.
    pub fn persist(&mut self, sites: &[Site]) {
        if sites.is_empty() {
            self.clear();
            return;
        }

        let content = match encode_sites(sites) {
            Ok(text) => text,
            Err(err) => {
                deck_error!("Failed to serialize sites: {}", err);
                return;
            }
        };

        if let Err(err) = self.store.set(&self.key, &content) {
            deck_error!("Failed to write sites under {:?}: {}", self.key, err);
        }
    }

    /// Remove the persisted list entirely.
    pub fn clear(&mut self) {
        if let Err(err) = self.store.remove(&self.key) {
            deck_error!("Failed to clear sites under {:?}: {}", self.key, err);
        }
    }
}

fn recovered(now_millis: i64) -> LoadOutcome {
    LoadOutcome {
        sites: default_sites(now_millis),
        source: LoadSource::Recovered,
    }
}
