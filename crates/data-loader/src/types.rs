//! Core domain types: the movie catalog and the user rating store.
//!
//! Both structures are built exactly once from the parsed tables and are
//! read-only afterwards. There is no post-construction mutation API, so
//! they can be shared across threads behind an `Arc` without locking.

use crate::error::{DataLoadError, Result};
use crate::parser::{MovieRecord, RatingTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Catalog
// =============================================================================

/// A movie and its attribute vector.
///
/// `norm` is the Euclidean norm of `attributes`, precomputed at load time
/// because cosine similarity divides by it on every comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    /// Raw attribute scores, one per evaluation category, in table order
    pub attributes: Vec<f64>,
    /// Precomputed L2 norm of the attribute vector
    pub norm: f64,
}

/// The item-attribute matrix: every movie, in attribute-table order.
///
/// All movies share the same attribute-vector length (`num_evaluations`);
/// construction rejects tables where that does not hold.
#[derive(Debug)]
pub struct Catalog {
    /// Movies in file order
    movies: Vec<Movie>,
    /// Name -> position in `movies`
    by_name: HashMap<String, usize>,
    /// Shared attribute-vector length
    num_evaluations: usize,
}

impl Catalog {
    /// Build the catalog from parsed movie records.
    ///
    /// Validates the load-time invariants:
    /// - at least one movie
    /// - every attribute vector has the same length as the first
    /// - no duplicate movie names
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self> {
        let num_evaluations = match records.first() {
            Some(record) => record.attributes.len(),
            None => {
                return Err(DataLoadError::EmptyTable {
                    table: "movie attributes".to_string(),
                })
            }
        };

        let mut movies = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for record in records {
            if record.attributes.len() != num_evaluations {
                return Err(DataLoadError::AttributeCountMismatch {
                    movie: record.name,
                    expected: num_evaluations,
                    found: record.attributes.len(),
                });
            }

            let norm = record
                .attributes
                .iter()
                .map(|a| a * a)
                .sum::<f64>()
                .sqrt();

            if by_name
                .insert(record.name.clone(), movies.len())
                .is_some()
            {
                return Err(DataLoadError::DuplicateMovie { movie: record.name });
            }
            movies.push(Movie {
                name: record.name,
                attributes: record.attributes,
                norm,
            });
        }

        Ok(Self {
            movies,
            by_name,
            num_evaluations,
        })
    }

    /// Look up a movie by name
    pub fn get(&self, name: &str) -> Option<&Movie> {
        self.by_name.get(name).map(|&idx| &self.movies[idx])
    }

    /// Raw attribute vector of a movie, if it exists
    pub fn attributes_of(&self, name: &str) -> Option<&[f64]> {
        self.get(name).map(|m| m.attributes.as_slice())
    }

    /// Precomputed L2 norm of a movie's attribute vector
    pub fn norm_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|m| m.norm)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Movies in attribute-table order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of evaluation categories shared by every movie
    pub fn num_evaluations(&self) -> usize {
        self.num_evaluations
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// RatingStore
// =============================================================================

/// One user's ratings, aligned slot-for-slot with the rating-table header.
///
/// A cell is `None` for an `NA` entry. This replaces the usual trick of
/// storing `0` for "unrated", which would collide with a genuine rating
/// of zero. Normalized cells keep `0.0` for unrated slots: that zero is
/// load-bearing, it makes unrated slots contribute nothing to the taste
/// profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRatings {
    raw: Vec<Option<f64>>,
    normalized: Vec<f64>,
    mean: Option<f64>,
}

impl UserRatings {
    /// Build from aligned cells, computing the mean over rated cells only
    /// and the mean-centered normalized vector.
    pub(crate) fn from_cells(cells: Vec<Option<f64>>) -> Self {
        let rated: Vec<f64> = cells.iter().filter_map(|c| *c).collect();
        let mean = if rated.is_empty() {
            None
        } else {
            Some(rated.iter().sum::<f64>() / rated.len() as f64)
        };

        let centered = mean.unwrap_or(0.0);
        let normalized = cells
            .iter()
            .map(|cell| match cell {
                Some(value) => value - centered,
                None => 0.0,
            })
            .collect();

        Self {
            raw: cells,
            normalized,
            mean,
        }
    }

    /// Raw ratings in header order; `None` means unrated
    pub fn raw(&self) -> &[Option<f64>] {
        &self.raw
    }

    /// Mean-centered ratings in header order; unrated slots are `0.0`
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    /// Mean of the rated cells, `None` if the user rated nothing
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// True iff the slot at `position` holds a rating
    pub fn is_rated(&self, position: usize) -> bool {
        matches!(self.raw.get(position), Some(Some(_)))
    }

    /// Number of rated (non-`NA`) slots
    pub fn rated_count(&self) -> usize {
        self.raw.iter().filter(|c| c.is_some()).count()
    }
}

/// The user-rating matrix: one `UserRatings` per user, plus the canonical
/// movie order taken from the rating-table header.
///
/// The header order is the slot order of every user row, and the order in
/// which the recommenders scan candidates (which makes their first-wins
/// tie-break deterministic).
#[derive(Debug)]
pub struct RatingStore {
    /// Movie names from the table header, defining per-user slot order
    movie_order: Vec<String>,
    /// Users in file order
    user_order: Vec<String>,
    users: HashMap<String, UserRatings>,
}

impl RatingStore {
    /// Build the store from a parsed rating table.
    ///
    /// Validates against the catalog:
    /// - every header movie must exist in the catalog
    /// - every row must have exactly one cell per header movie
    /// - no duplicate user names
    pub fn from_table(table: RatingTable, catalog: &Catalog) -> Result<Self> {
        for movie in &table.movie_order {
            if !catalog.contains(movie) {
                return Err(DataLoadError::UnknownMovie {
                    movie: movie.clone(),
                });
            }
        }
        if table.rows.is_empty() {
            return Err(DataLoadError::EmptyTable {
                table: "user ratings".to_string(),
            });
        }

        let mut users = HashMap::with_capacity(table.rows.len());
        let mut user_order = Vec::with_capacity(table.rows.len());

        for row in table.rows {
            if row.cells.len() != table.movie_order.len() {
                return Err(DataLoadError::FieldCountMismatch {
                    expected: table.movie_order.len(),
                    found: row.cells.len(),
                    line: row.line,
                });
            }
            if users.contains_key(&row.name) {
                return Err(DataLoadError::DuplicateUser { user: row.name });
            }
            user_order.push(row.name.clone());
            users.insert(row.name, UserRatings::from_cells(row.cells));
        }

        Ok(Self {
            movie_order: table.movie_order,
            user_order,
            users,
        })
    }

    /// Look up a user's ratings; `None` if the user is unknown.
    ///
    /// This is the existence check as well: callers test membership with
    /// this lookup instead of probing and catching a failure.
    pub fn ratings_of(&self, user: &str) -> Option<&UserRatings> {
        self.users.get(user)
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    /// Movie names in header order (the canonical slot order)
    pub fn movie_order(&self) -> &[String] {
        &self.movie_order
    }

    /// User names in file order
    pub fn user_order(&self) -> &[String] {
        &self.user_order
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::UserRow;

    fn record(name: &str, attributes: Vec<f64>) -> MovieRecord {
        MovieRecord {
            name: name.to_string(),
            attributes,
        }
    }

    #[test]
    fn catalog_precomputes_norms() {
        let catalog =
            Catalog::from_records(vec![record("Titanic", vec![3.0, 4.0])]).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.num_evaluations(), 2);
        assert!((catalog.norm_of("Titanic").unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn catalog_rejects_ragged_rows() {
        let result = Catalog::from_records(vec![
            record("A", vec![1.0, 2.0]),
            record("B", vec![1.0]),
        ]);

        assert!(matches!(
            result,
            Err(DataLoadError::AttributeCountMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn catalog_rejects_duplicates_and_empty() {
        let result = Catalog::from_records(vec![
            record("A", vec![1.0]),
            record("A", vec![2.0]),
        ]);
        assert!(matches!(result, Err(DataLoadError::DuplicateMovie { .. })));

        let result = Catalog::from_records(vec![]);
        assert!(matches!(result, Err(DataLoadError::EmptyTable { .. })));
    }

    #[test]
    fn user_ratings_mean_centering() {
        // Rated cells: 5 and 1, mean 3
        let ratings =
            UserRatings::from_cells(vec![Some(5.0), None, Some(1.0)]);

        assert_eq!(ratings.mean(), Some(3.0));
        assert_eq!(ratings.normalized(), &[2.0, 0.0, -2.0]);
        assert!(ratings.is_rated(0));
        assert!(!ratings.is_rated(1));
        assert_eq!(ratings.rated_count(), 2);
    }

    #[test]
    fn user_with_no_ratings_has_no_mean() {
        let ratings = UserRatings::from_cells(vec![None, None]);

        assert_eq!(ratings.mean(), None);
        assert_eq!(ratings.normalized(), &[0.0, 0.0]);
        assert_eq!(ratings.rated_count(), 0);
    }

    fn two_movie_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("A", vec![1.0, 0.0]),
            record("B", vec![0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn rating_store_aligns_rows_to_header() {
        let catalog = two_movie_catalog();
        let table = RatingTable {
            movie_order: vec!["A".to_string(), "B".to_string()],
            rows: vec![UserRow {
                name: "Sofia".to_string(),
                cells: vec![Some(5.0), None],
                line: 2,
            }],
        };

        let store = RatingStore::from_table(table, &catalog).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.movie_order(), &["A".to_string(), "B".to_string()]);

        let sofia = store.ratings_of("Sofia").unwrap();
        assert_eq!(sofia.raw(), &[Some(5.0), None]);
        assert!(store.ratings_of("nobody").is_none());
    }

    #[test]
    fn rating_store_rejects_unknown_header_movie() {
        let catalog = two_movie_catalog();
        let table = RatingTable {
            movie_order: vec!["A".to_string(), "C".to_string()],
            rows: vec![],
        };

        let result = RatingStore::from_table(table, &catalog);
        assert!(matches!(result, Err(DataLoadError::UnknownMovie { .. })));
    }

    #[test]
    fn rating_store_rejects_short_rows() {
        let catalog = two_movie_catalog();
        let table = RatingTable {
            movie_order: vec!["A".to_string(), "B".to_string()],
            rows: vec![UserRow {
                name: "Sofia".to_string(),
                cells: vec![Some(5.0)],
                line: 2,
            }],
        };

        let result = RatingStore::from_table(table, &catalog);
        assert!(matches!(
            result,
            Err(DataLoadError::FieldCountMismatch {
                expected: 2,
                found: 1,
                line: 2,
            })
        ));
    }
}
