use std::fmt;

use thiserror::Error;

/// Input field of the add-site form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Url,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Url => write!(f, "url"),
        }
    }
}

/// Rejection of user input on the add flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),
    #[error("invalid url: {0:?}")]
    InvalidUrl(String),
}
