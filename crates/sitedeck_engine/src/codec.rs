use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sitedeck_core::{normalize_site_url, Site, SiteId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed site list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("site {id} has an empty name")]
    EmptyName { id: String },
    #[error("site {id} has an invalid url {url:?}")]
    InvalidUrl { id: String, url: String },
    #[error("site id {0} appears more than once")]
    DuplicateId(String),
}

/// On-disk shape of one site: `{"id", "name", "url", "addedAt"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSite {
    id: String,
    name: String,
    url: String,
    added_at: i64,
}

pub fn encode_sites(sites: &[Site]) -> Result<String, serde_json::Error> {
    let persisted: Vec<PersistedSite> = sites
        .iter()
        .map(|site| PersistedSite {
            id: site.id.as_str().to_string(),
            name: site.name.clone(),
            url: site.url.clone(),
            added_at: site.added_at,
        })
        .collect();
    serde_json::to_string(&persisted)
}

/// Parse a stored site list, rejecting anything the registry could not have written.
pub fn decode_sites(text: &str) -> Result<Vec<Site>, DecodeError> {
    let persisted: Vec<PersistedSite> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(persisted.len());
    let mut sites = Vec::with_capacity(persisted.len());
    for entry in persisted {
        if !seen.insert(entry.id.clone()) {
            return Err(DecodeError::DuplicateId(entry.id));
        }
        if entry.name.trim().is_empty() {
            return Err(DecodeError::EmptyName { id: entry.id });
        }
        // Stored urls are already normalized, so normalizing must be a no-op.
        if normalize_site_url(&entry.url).as_deref() != Ok(entry.url.as_str()) {
            return Err(DecodeError::InvalidUrl {
                id: entry.id,
                url: entry.url,
            });
        }
        sites.push(Site {
            id: SiteId::new(entry.id),
            name: entry.name,
            url: entry.url,
            added_at: entry.added_at,
        });
    }
    Ok(sites)
}
