use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurioError {
    #[error("Remote request failed ({status})")]
    Remote { status: u16 },

    #[error("Invalid API response shape: {0}")]
    ResponseShape(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CurioError>;
