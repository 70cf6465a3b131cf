use reqwest::StatusCode;

/// Errors raised by the YouTube and Spotify clients and by the conversion.
///
/// A title that cannot be matched is not an error; it is reported as
/// [`crate::types::MatchOutcome::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid configuration. Raised before any work starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The access token was rejected. Aborts a running conversion.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid playlist reference: {0}")]
    InvalidPlaylist(String),
}

impl Error {
    /// Whether the error must abort the whole conversion rather than a
    /// single title.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::Authentication(_))
    }

    pub(crate) async fn from_response(service: &str, response: reqwest::Response) -> Self {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error text".to_string());

        if status == StatusCode::UNAUTHORIZED {
            return Error::Authentication(format!("{} rejected the access token: {}", service, message));
        }

        Error::Api { status, message }
    }
}
