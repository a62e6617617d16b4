//! # Recommender Crate
//!
//! The two recommendation algorithms over the loaded tables:
//!
//! - **content**: `ContentRecommender`, ranks unrated movies by cosine
//!   similarity between their attributes and a taste profile synthesized
//!   from the user's mean-centered ratings
//! - **cf**: `CfRecommender`, predicts per-movie scores via k-nearest
//!   neighbor weighted averaging over item-item similarities
//! - **scorer**: the shared vector primitives (dot product, norm, cosine)
//! - **error**: `ScoreError` for the conditions that abort a computation
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{CfRecommender, ContentRecommender, Recommendation};
//! use std::sync::Arc;
//!
//! let (catalog, ratings) = data_loader::load_from_files(movies, ranks)?;
//! let catalog = Arc::new(catalog);
//! let ratings = Arc::new(ratings);
//!
//! let content = ContentRecommender::new(catalog.clone(), ratings.clone());
//! match content.recommend("Sofia")? {
//!     Recommendation::Movie(name) => println!("watch {name}"),
//!     other => println!("{other}"),
//! }
//!
//! let cf = CfRecommender::new(catalog, ratings);
//! let score = cf.predict_score("Titanic", "Sofia", 3)?;
//! ```
//!
//! All computation is pure and reads only the shared immutable stores, so
//! recommenders can serve concurrent calls without synchronization.

pub mod cf;
pub mod content;
pub mod error;
pub mod scorer;
pub mod types;

// Re-export main types
pub use cf::CfRecommender;
pub use content::ContentRecommender;
pub use error::{Result, ScoreError};
pub use types::Recommendation;
