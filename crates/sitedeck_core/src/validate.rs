use url::Url;

use crate::{Field, ValidationError};

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Name and URL that passed validation but have not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDraft {
    pub name: String,
    pub url: String,
}

/// Normalize a user-entered URL into an absolute `http(s)://` URL string.
///
/// Leading and trailing whitespace is dropped and `https://` is prepended when
/// the input carries no `http://` or `https://` prefix (any case). The result
/// is returned as typed; the parse only decides validity.
pub fn normalize_site_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidUrl(raw.to_string()));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    match Url::parse(&candidate) {
        Ok(parsed) if parsed.has_host() => Ok(candidate),
        _ => Err(ValidationError::InvalidUrl(raw.to_string())),
    }
}

/// Validate the add-site form: both fields present, then a well-formed URL.
pub fn validate_site_input(name: &str, raw_url: &str) -> Result<SiteDraft, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField(Field::Name));
    }
    if raw_url.trim().is_empty() {
        return Err(ValidationError::MissingField(Field::Url));
    }
    let url = normalize_site_url(raw_url)?;
    Ok(SiteDraft {
        name: name.to_string(),
        url,
    })
}

fn has_http_scheme(candidate: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        candidate
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
