//! Error types for the recommendation algorithms.
//!
//! "User not found" is deliberately NOT an error here: the two public
//! recommendation entry points report it as a [`crate::Recommendation`]
//! sentinel, because an unknown user is an expected, user-visible outcome.
//! The variants below are the conditions that abort a computation.

use thiserror::Error;

/// Errors from similarity scoring and score prediction.
///
/// The degenerate floating-point cases (zero-norm vectors, zero total
/// similarity weight) are reported explicitly instead of letting NaN
/// propagate through comparisons.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Attribute vectors of differing length reached a dot product.
    /// Indicates malformed input data, never tolerated silently.
    #[error("Vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Cosine similarity against a zero-norm vector, or a k-NN selection
    /// whose similarity weights sum to zero
    #[error("Similarity is undefined (zero-norm vector or zero total weight)")]
    UndefinedSimilarity,

    /// The user exists but has not rated a single movie, so neither a
    /// taste profile nor a k-NN pool can be formed
    #[error("User {0} has no rated movies")]
    NoRatedMovies(String),

    /// Movie name not present in the catalog
    #[error("Unknown movie: {0}")]
    UnknownMovie(String),

    /// User name not present in the rating table
    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ScoreError>;
