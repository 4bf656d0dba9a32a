use thiserror::Error;

/// Errors from loading complaint data or writing a report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no complaints found in input")]
    EmptyInput,
    #[error("line {line}: malformed date {value:?} (expected yyyy-mm-dd)")]
    MalformedDate { value: String, line: u64 },
    #[error("missing required column {0:?}")]
    MissingField(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
