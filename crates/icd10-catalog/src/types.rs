//! Error types for catalog file processing and query validation.

use thiserror::Error;

use crate::dataset::Dataset;

/// Errors that can occur while reading catalog files or validating queries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error reading a catalog file.
    #[error("IO error reading catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Catalog file not found.
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required dataset files missing from the data directory.
    #[error("Missing dataset files: {missing} in {directory}")]
    MissingDatasets {
        /// Comma-joined names of the missing datasets.
        missing: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name in a header row.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// Search query shorter than the minimum for the queried field.
    #[error("At least {minimum} characters are required (got {length})")]
    QueryTooShort {
        /// Minimum query length for this dataset/field.
        minimum: usize,
        /// Length of the rejected query.
        length: usize,
    },

    /// Field name outside the per-dataset search/sort allow-list.
    #[error("Unknown field '{field}' for dataset {dataset}")]
    UnknownField {
        /// The dataset that was queried.
        dataset: Dataset,
        /// The rejected field name.
        field: String,
    },

    /// Match mode string that is neither `prefix` nor `substring`.
    #[error("Invalid match mode: {value} (expected 'prefix' or 'substring')")]
    InvalidMatchMode {
        /// The rejected value.
        value: String,
    },

    /// Sort order string that is neither `asc` nor `desc`.
    #[error("Invalid sort order: {value} (expected 'asc' or 'desc')")]
    InvalidSortOrder {
        /// The rejected value.
        value: String,
    },
}

impl CatalogError {
    /// Returns true for errors caused by malformed or out-of-policy input,
    /// detected before any I/O. Everything else is an I/O or parse failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::QueryTooShort { .. }
                | CatalogError::UnknownField { .. }
                | CatalogError::InvalidMatchMode { .. }
                | CatalogError::InvalidSortOrder { .. }
        )
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
