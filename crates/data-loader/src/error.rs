//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the two input tables.
///
/// Every variant carries enough context to point at the offending file,
/// line, or name, so the CLI can report load failures without guesswork.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Unable to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a table couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A rating row has a different number of cells than the header
    #[error("Expected {expected} cells but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A movie row has a different number of attributes than the first row
    #[error("Movie {movie} has {found} attributes, expected {expected}")]
    AttributeCountMismatch {
        movie: String,
        expected: usize,
        found: usize,
    },

    /// The rating table header names a movie that is not in the catalog
    #[error("Rating table references unknown movie: {movie}")]
    UnknownMovie { movie: String },

    /// Same movie name appears twice in the attribute table
    #[error("Duplicate movie: {movie}")]
    DuplicateMovie { movie: String },

    /// Same user name appears twice in the rating table
    #[error("Duplicate user: {user}")]
    DuplicateUser { user: String },

    /// A table contained no data rows
    #[error("Empty table: {table}")]
    EmptyTable { table: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
