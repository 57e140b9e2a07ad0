use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed element payload: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
