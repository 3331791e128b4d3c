use thiserror::Error;

/// Errors that can occur while talking to the recipe API
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API returned status {0}")]
    Status(u16),

    /// The response body was not the expected `hits` envelope
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}
