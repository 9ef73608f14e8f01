use thiserror::Error;

use crate::model::Collection;

/// Errors that can occur while driving the ingredient editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// Clipboard could not be read (denied, empty backend, or no display)
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Row index does not exist in the addressed collection
    #[error("Row {index} out of range for {collection} rows (len {len})")]
    RowOutOfRange {
        collection: Collection,
        index: usize,
        len: usize,
    },

    /// The confirmed table must always keep at least one row
    #[error("Cannot delete the last confirmed row")]
    LastConfirmedRow,

    /// Field name is not one of quantity, unit, ingredient
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Host command line could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// I/O error in the host loop
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
