use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("No match: {0}")]
    NoMatch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MarqueeError {
    /// Returns `true` for a well-formed API response that reported no match
    /// (as opposed to a transport or decoding failure).
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch(_))
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
