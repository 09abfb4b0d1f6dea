//! Error handling module for the MovieLab client.
//!
//! Every fetch and coordination failure surfaces as an [`ApiError`] value so
//! callers can branch on what went wrong without parsing strings.

/// Client error type.
#[derive(Debug)]
pub enum ApiError {
    /// Network failure, timeout, or an undecodable/unexpected response
    Transport(String),
    /// Server rejected the submitted data; carries the server's message verbatim
    Validation(String),
    /// Requested record does not exist on the server
    NotFound(String),
    /// A referenced person id could not be resolved before a save
    ReferenceResolution(String),
}

impl ApiError {
    /// Get the short label for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport error",
            ApiError::Validation(_) => "validation error",
            ApiError::NotFound(_) => "not found",
            ApiError::ReferenceResolution(_) => "reference resolution error",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(msg) => msg.clone(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::ReferenceResolution(msg) => msg.clone(),
        }
    }

    /// Whether this error means the record is missing server-side.
    ///
    /// Useful for callers that want to treat deleting an already-deleted
    /// record as success.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Request error: {:?}", err);
        ApiError::Transport(format!("Request error: {}", err))
    }
}
