#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("cancelled")]
    Cancelled,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    /// Stable machine-readable tag for the error, used by the console protocol.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Forbidden => "authorization",
            Self::Unauthorized(_) => "authentication",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Cancelled => "cancelled",
            Self::Internal(_) => "internal",
        }
    }

    /// Message suitable for showing to the person who triggered the operation.
    ///
    /// Internal errors are not echoed back; the detail only goes to the log.
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Unauthorized(msg) => msg.clone(),
            Self::Forbidden => "you are not allowed to perform this action".into(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Conflict(msg) => msg.clone(),
            Self::Cancelled => "operation cancelled".into(),
            Self::Internal(_) => "internal error".into(),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::Unauthorized("not signed in".into())
    }
}
