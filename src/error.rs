use thiserror::Error;

/// Errors that can occur while normalising the raw recipe dataset
#[derive(Error, Debug)]
pub enum NormaliseError {
    /// A required column is absent from the raw input table
    #[error("Missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A cell holds a value of the wrong type
    #[error("Column `{column}` holds a non-{expected} value at row {row}")]
    TypeMismatch {
        column: &'static str,
        row: usize,
        expected: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
