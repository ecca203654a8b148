use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
