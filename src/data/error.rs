use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading the listing catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The catalog file exists but could not be read.
    #[error("reading catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row.
    #[error("catalog is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// Malformed delimited text or a cell that does not parse.
    #[error("parsing catalog: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// A cell parsed but holds a value the catalog cannot accept.
    #[error("row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        message: String,
    },
}
