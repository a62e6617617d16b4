//! Content-based recommendation.
//!
//! ## Algorithm
//! 1. Synthesize a taste profile: for each evaluation category, sum the
//!    user's mean-centered rating of every movie times that movie's
//!    attribute value. Unrated slots are 0.0 after centering, so they
//!    contribute nothing.
//! 2. Scan the movies the user has NOT rated, in header order, scoring
//!    each by cosine similarity between the profile and its attributes.
//! 3. Keep the first movie attaining the maximum: a candidate replaces
//!    the running best only on a strictly greater score.

use crate::error::{Result, ScoreError};
use crate::scorer;
use crate::types::Recommendation;
use data_loader::{Catalog, RatingStore, UserRatings};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Recommends by similarity between a user's taste profile and movie
/// attribute vectors.
pub struct ContentRecommender {
    /// Shared reference to the catalog (read-only, so no locking needed)
    catalog: Arc<Catalog>,
    ratings: Arc<RatingStore>,
}

impl ContentRecommender {
    pub fn new(catalog: Arc<Catalog>, ratings: Arc<RatingStore>) -> Self {
        Self { catalog, ratings }
    }

    /// Recommend the unrated movie most similar to the user's taste.
    ///
    /// Returns `Recommendation::UserNotFound` for unknown users and
    /// `Recommendation::AllMoviesRated` when no candidate is left. Fails
    /// with `NoRatedMovies` when the user exists but rated nothing. A
    /// profile that mean-centers to the zero vector ranks all candidates
    /// equally, so the first unrated movie in header order wins.
    #[instrument(skip(self))]
    pub fn recommend(&self, user: &str) -> Result<Recommendation> {
        let Some(user_ratings) = self.ratings.ratings_of(user) else {
            return Ok(Recommendation::UserNotFound);
        };
        if user_ratings.rated_count() == 0 {
            return Err(ScoreError::NoRatedMovies(user.to_string()));
        }

        let profile = self.taste_profile(user_ratings)?;
        debug!(
            rated = user_ratings.rated_count(),
            categories = profile.len(),
            "built taste profile"
        );

        // Mean-centering can collapse the profile to the zero vector
        // (e.g. a single rated movie). Cosine similarity is then
        // undefined for every candidate, so all candidates tie and the
        // first-wins rule picks the earliest unrated movie.
        if scorer::euclidean_norm(&profile) == 0.0 {
            debug!("zero-norm taste profile, falling back to header order");
            return Ok(self.first_unrated(user_ratings));
        }

        let mut best: Option<(f64, &str)> = None;
        for (position, movie) in self.ratings.movie_order().iter().enumerate() {
            if user_ratings.is_rated(position) {
                continue;
            }
            let attributes = self.attributes_of(movie)?;
            let similarity = scorer::cosine_similarity(&profile, attributes)?;
            // Strict > keeps the first movie attaining the maximum
            match best {
                Some((top, _)) if similarity <= top => {}
                _ => best = Some((similarity, movie)),
            }
        }

        Ok(match best {
            Some((similarity, movie)) => {
                debug!(movie, similarity, "content recommendation");
                Recommendation::Movie(movie.to_string())
            }
            None => Recommendation::AllMoviesRated,
        })
    }

    /// Build the taste-profile vector, one entry per evaluation category.
    fn taste_profile(&self, user_ratings: &UserRatings) -> Result<Vec<f64>> {
        let mut profile = vec![0.0; self.catalog.num_evaluations()];
        let normalized = user_ratings.normalized();

        for (position, movie) in self.ratings.movie_order().iter().enumerate() {
            let weight = normalized[position];
            if weight == 0.0 {
                continue;
            }
            let attributes = self.attributes_of(movie)?;
            for (slot, attribute) in profile.iter_mut().zip(attributes) {
                *slot += weight * attribute;
            }
        }

        Ok(profile)
    }

    fn first_unrated(&self, user_ratings: &UserRatings) -> Recommendation {
        self.ratings
            .movie_order()
            .iter()
            .enumerate()
            .find(|(position, _)| !user_ratings.is_rated(*position))
            .map(|(_, movie)| Recommendation::Movie(movie.clone()))
            .unwrap_or(Recommendation::AllMoviesRated)
    }

    fn attributes_of(&self, movie: &str) -> Result<&[f64]> {
        self.catalog
            .attributes_of(movie)
            .ok_or_else(|| ScoreError::UnknownMovie(movie.to_string()))
    }
}
