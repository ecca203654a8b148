use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    AppSync(#[from] appsync::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
