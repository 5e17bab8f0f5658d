use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("invalid numeric field: {0}")]
    InvalidNumber(String),
    #[error("missing attribute: {0}")]
    MissingAttribute(String),
}
