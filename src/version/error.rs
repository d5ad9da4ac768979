use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Malformed constraint {constraint:?}: segment {segment:?} is neither digits nor '*'")]
    Malformed { constraint: String, segment: String },

    #[error("Invalid pattern {constraint:?}: {reason}")]
    Pattern { constraint: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
