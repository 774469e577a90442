use crate::model::{ClassId, StudentId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(String),

    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Class not found: {0}")]
    ClassNotFound(ClassId),

    #[error("Class is full: {0}")]
    ClassFull(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;
