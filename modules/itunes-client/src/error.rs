use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Connectivity probe reported the network as unreachable. No request
    /// is issued on this branch.
    #[error("Please check your internet connection.")]
    Offline,

    /// The composed query string did not parse as a URL. Carries the
    /// offending string for diagnosability.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (DNS, connect, read).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a status other than 200. The body is
    /// discarded and callers get the same generic message regardless.
    #[error("Something went wrong!")]
    Status { status: u16 },

    /// The response body was not valid JSON. Displays the decoder's own
    /// message.
    #[error("{0}")]
    Decode(String),

    /// The body decoded as JSON but the top level was not an object.
    #[error("Unexpected response shape: top level is not a JSON object")]
    UnexpectedShape,
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}
