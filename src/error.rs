use thiserror::Error;

/// Errors surfaced by catalog mutations and the session services
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HunterError {
    #[error("You must be signed in to do that")]
    NotAuthenticated,

    #[error("You can only change your own listings")]
    NotAuthorized,

    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Remote collection failed: {0}")]
    RemoteFailure(String),

    #[error("Invalid listing: {0}")]
    ValidationFailure(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Local storage failed: {0}")]
    Storage(String),
}

impl HunterError {
    /// Wrap a collaborator failure, keeping the whole context chain
    pub fn remote(err: anyhow::Error) -> Self {
        Self::RemoteFailure(format!("{err:#}"))
    }

    pub fn storage(err: anyhow::Error) -> Self {
        Self::Storage(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, HunterError>;
