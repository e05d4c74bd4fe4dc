use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading trip data or talking to the user.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// The city's CSV file could not be opened or decoded.
    #[error("Failed to read trip data from {path}: {source}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A `Start Time` cell did not match `%Y-%m-%d %H:%M:%S`.
    #[error("Invalid start time {value:?} on row {row}")]
    Timestamp { row: usize, value: String },

    /// The input stream closed while a prompt was waiting for an answer.
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
