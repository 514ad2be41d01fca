use crate::model::ServerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServzError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("Server not found: {0}")]
    NotFound(ServerId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(#[source] serde_yaml::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ServzError>;
