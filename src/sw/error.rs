use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not import {}: {message}", path.display())]
    Import { path: PathBuf, message: String },

    #[error("Process error: {0}")]
    Process(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SwError>;
