//! Item-item collaborative filtering.
//!
//! ## Algorithm
//! `predict_score(movie, user, k)` estimates what `user` would rate
//! `movie` from the movies they HAVE rated:
//! 1. Compute cosine similarity between the target's attributes and
//!    every rated movie's attributes.
//! 2. Stable-sort by similarity descending: equal similarities keep
//!    their header-order position, which makes the top-`k` cut
//!    deterministic.
//! 3. Prediction is the similarity-weighted average of the user's raw
//!    ratings over the top `k` neighbors (fewer if the user rated fewer
//!    than `k` movies).
//!
//! `recommend(user, k)` runs that prediction for every unrated movie and
//! keeps the best one, first-candidate-wins on ties.

use crate::error::{Result, ScoreError};
use crate::scorer;
use crate::types::Recommendation;
use data_loader::{Catalog, RatingStore};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Recommends by k-nearest-neighbor prediction over item-item
/// similarities.
pub struct CfRecommender {
    catalog: Arc<Catalog>,
    ratings: Arc<RatingStore>,
}

impl CfRecommender {
    pub fn new(catalog: Arc<Catalog>, ratings: Arc<RatingStore>) -> Self {
        Self { catalog, ratings }
    }

    /// Predict the rating `user` would give `movie`, using the `k` rated
    /// movies most similar to it.
    ///
    /// Unknown names fail with `UnknownUser` / `UnknownMovie`; a user
    /// with no ratings fails with `NoRatedMovies`. When the selected
    /// similarity weights sum to zero (all neighbors orthogonal to the
    /// target, or cancelling signs) the prediction degrades to the
    /// unweighted mean of the selected ratings. `k == 0` selects
    /// nothing and fails with `UndefinedSimilarity`.
    pub fn predict_score(&self, movie: &str, user: &str, k: usize) -> Result<f64> {
        let user_ratings = self
            .ratings
            .ratings_of(user)
            .ok_or_else(|| ScoreError::UnknownUser(user.to_string()))?;
        let target = self
            .catalog
            .attributes_of(movie)
            .ok_or_else(|| ScoreError::UnknownMovie(movie.to_string()))?;

        // (similarity, header position) for every movie the user rated
        let mut neighbors: Vec<(f64, usize)> = Vec::with_capacity(user_ratings.rated_count());
        for (position, name) in self.ratings.movie_order().iter().enumerate() {
            if !user_ratings.is_rated(position) {
                continue;
            }
            let attributes = self
                .catalog
                .attributes_of(name)
                .ok_or_else(|| ScoreError::UnknownMovie(name.clone()))?;
            let similarity = scorer::cosine_similarity(target, attributes)?;
            neighbors.push((similarity, position));
        }

        if neighbors.is_empty() {
            return Err(ScoreError::NoRatedMovies(user.to_string()));
        }

        // sort_by is stable: ties keep header order
        neighbors.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        let mut rating_sum = 0.0;
        let mut selected = 0usize;
        for &(similarity, position) in neighbors.iter().take(k) {
            if let Some(rating) = user_ratings.raw()[position] {
                weighted_sum += similarity * rating;
                weight_total += similarity;
                rating_sum += rating;
                selected += 1;
            }
        }

        if selected == 0 {
            return Err(ScoreError::UndefinedSimilarity);
        }
        if weight_total == 0.0 {
            // Zero similarity mass: every selected neighbor counts the same
            return Ok(rating_sum / selected as f64);
        }
        Ok(weighted_sum / weight_total)
    }

    /// Recommend the unrated movie with the highest predicted rating.
    ///
    /// The first candidate in header order initializes the running best
    /// unconditionally (even a poor score), and later candidates replace
    /// it only on a strictly greater prediction.
    #[instrument(skip(self))]
    pub fn recommend(&self, user: &str, k: usize) -> Result<Recommendation> {
        let Some(user_ratings) = self.ratings.ratings_of(user) else {
            return Ok(Recommendation::UserNotFound);
        };
        if user_ratings.rated_count() == 0 {
            return Err(ScoreError::NoRatedMovies(user.to_string()));
        }

        let mut best: Option<(f64, &str)> = None;
        for (position, movie) in self.ratings.movie_order().iter().enumerate() {
            if user_ratings.is_rated(position) {
                continue;
            }
            let score = self.predict_score(movie, user, k)?;
            match best {
                Some((top, _)) if score <= top => {}
                _ => best = Some((score, movie)),
            }
        }

        Ok(match best {
            Some((score, movie)) => {
                debug!(movie, score, "cf recommendation");
                Recommendation::Movie(movie.to_string())
            }
            None => Recommendation::AllMoviesRated,
        })
    }
}
