use thiserror::Error;

#[derive(Error, Debug)]
pub enum OfferError {
    #[error("scenario file not found: {0}")]
    ScenarioNotFound(String),

    #[error("scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("scenario file already exists: {0}")]
    ScenarioExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OfferError>;
