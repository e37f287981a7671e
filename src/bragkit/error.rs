use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BragError {
    #[error("brag CLI not found at {}", .0.display())]
    CliNotFound(PathBuf),

    #[error("brag CLI failed ({status}): {stderr}")]
    CliFailed { status: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BragError>;
