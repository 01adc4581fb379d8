use crate::index::DisplayIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Index {0} not found")]
    IndexNotFound(DisplayIndex),

    #[error("Invalid index format: {0}")]
    InvalidIndex(String),

    #[error("Unknown filter: {0} (expected all, complete or incomplete)")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
