//! Outcome type shared by the two recommendation entry points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a recommendation call.
///
/// Unknown users and exhausted catalogs are expected outcomes, so they
/// are variants here rather than errors: the entry points always hand
/// the caller a well-defined value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// The best-scoring movie the user has not rated yet
    Movie(String),
    /// The user has already rated every movie in the catalog
    AllMoviesRated,
    /// The user does not appear in the rating table
    UserNotFound,
}

impl Recommendation {
    /// The recommended movie name, if there is one
    pub fn movie(&self) -> Option<&str> {
        match self {
            Recommendation::Movie(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Movie(name) => write!(f, "{}", name),
            Recommendation::AllMoviesRated => write!(f, "ALL MOVIES RATED"),
            // Sentinel string kept from the original data format
            Recommendation::UserNotFound => write!(f, "USER NOT FOUND"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Recommendation::Movie("Titanic".to_string()).to_string(),
            "Titanic"
        );
        assert_eq!(Recommendation::UserNotFound.to_string(), "USER NOT FOUND");
    }

    #[test]
    fn test_movie_accessor() {
        assert_eq!(
            Recommendation::Movie("Up".to_string()).movie(),
            Some("Up")
        );
        assert_eq!(Recommendation::AllMoviesRated.movie(), None);
    }
}
