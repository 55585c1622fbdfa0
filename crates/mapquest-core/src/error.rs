use thiserror::Error;

/// Result type alias for MapQuest operations
pub type Result<T> = std::result::Result<T, MapQuestError>;

/// Errors that can occur when using the MapQuest geocoding API
#[derive(Error, Debug)]
pub enum MapQuestError {
    /// The API answered, but its own status code reports a failure
    #[error("API error (statuscode {statuscode}): {}", .messages.join("; "))]
    Api {
        /// `info.statuscode` from the response
        statuscode: i64,
        /// `info.messages` from the response
        messages: Vec<String>,
    },

    /// Open accessor lookup for a field that is absent or empty
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The response body is valid JSON but not a geocoding response
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The server answered with a non-success HTTP status
    #[error("HTTP status {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, or the status reason when the body is empty
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No API key was configured
    #[error("no API key configured")]
    MissingApiKey,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl MapQuestError {
    /// Returns true if the error came from the HTTP transport
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Status { .. } | Self::Http(_) | Self::Timeout | Self::Connection(_)
        )
    }

    /// Returns the HTTP status code if the server rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the API's message list if this is an API error
    #[must_use]
    pub fn api_messages(&self) -> Option<&[String]> {
        match self {
            Self::Api { messages, .. } => Some(messages),
            _ => None,
        }
    }
}
