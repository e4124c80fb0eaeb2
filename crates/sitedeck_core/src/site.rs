use std::fmt;

/// Opaque, immutable identifier of a registered site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SiteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    /// Always the output of [`crate::normalize_site_url`].
    pub url: String,
    /// Creation time in epoch milliseconds.
    pub added_at: i64,
}

/// Identity and timestamp handed to the add flow by the caller, which owns
/// the clock and the id generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStamp {
    pub id: SiteId,
    pub added_at: i64,
}

/// First-run registry content, used when nothing usable is persisted.
pub fn default_sites(now_millis: i64) -> Vec<Site> {
    vec![
        Site {
            id: SiteId::new("1"),
            name: "Rand'eau Vive".to_string(),
            url: "https://www.randeauvive.com".to_string(),
            added_at: now_millis,
        },
        Site {
            id: SiteId::new("2"),
            name: "Trail des Lucioles".to_string(),
            url: "https://traildeslucioles.fr".to_string(),
            added_at: now_millis,
        },
    ]
}
