use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access task file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task file is malformed: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
