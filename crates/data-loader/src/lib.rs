//! # Data Loader Crate
//!
//! Loads the two whitespace-delimited input tables of the recommender:
//! the movie attribute table and the user rating table.
//!
//! ## Main Components
//!
//! - **types**: `Catalog` (movies + precomputed norms) and `RatingStore`
//!   (per-user raw and mean-centered ratings)
//! - **parser**: parse table content into intermediate records
//! - **load**: read both files, parse in parallel, build the stores
//! - **error**: error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_from_files;
//! use std::path::Path;
//!
//! let (catalog, ratings) = load_from_files(
//!     Path::new("data/movies_features.txt"),
//!     Path::new("data/ranks_matrix.txt"),
//! )?;
//!
//! println!(
//!     "{} movies, {} users, {} evaluation categories",
//!     catalog.len(),
//!     ratings.len(),
//!     catalog.num_evaluations()
//! );
//! ```
//!
//! Both stores are immutable once built; share them behind `Arc` for
//! concurrent recommendation calls.

// Public modules
pub mod error;
pub mod load;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use load::load_from_files;
pub use parser::{MovieRecord, RatingTable, UserRow};
pub use types::{Catalog, Movie, RatingStore, UserRatings};
