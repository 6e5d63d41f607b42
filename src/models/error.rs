/// Failure modes of loading the skip list.
///
/// `Display` renders only the human-readable message; the page adds its own
/// `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Api,
    MalformedResponse,
    Config,
}

impl AppError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Api { .. } => ErrorKind::Api,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status for API-reported failures.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
