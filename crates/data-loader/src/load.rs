//! Loading the two tables from disk and building the stores.
//!
//! This is the only module in the workspace that touches the filesystem.
//! The recommenders never see paths, only the finished [`Catalog`] and
//! [`RatingStore`].

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Catalog, RatingStore};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the movie attribute table and the user rating table, returning
/// the two read-only stores.
///
/// Steps:
/// 1. Read both files (a missing file maps to `FileNotFound`)
/// 2. Parse the two tables in parallel with `rayon::join`
/// 3. Build the catalog, then validate the rating table against it
pub fn load_from_files(movies_path: &Path, ranks_path: &Path) -> Result<(Catalog, RatingStore)> {
    let movies_content = read_table(movies_path)?;
    let ranks_content = read_table(ranks_path)?;

    // The two tables are independent until validation, so parse them in
    // parallel
    let (movie_records, rating_table) = rayon::join(
        || parser::parse_movie_table(&movies_content),
        || parser::parse_rating_table(&ranks_content),
    );
    let movie_records = movie_records?;
    let rating_table = rating_table?;

    let catalog = Catalog::from_records(movie_records)?;
    let ratings = RatingStore::from_table(rating_table, &catalog)?;

    info!(
        movies = catalog.len(),
        users = ratings.len(),
        evaluations = catalog.num_evaluations(),
        "loaded recommendation tables"
    );

    Ok((catalog, ratings))
}

fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let missing = Path::new("definitely/not/here.txt");
        let result = load_from_files(missing, missing);

        match result {
            Err(DataLoadError::FileNotFound { path }) => {
                assert!(path.contains("not/here.txt"));
            }
            other => panic!("expected FileNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_round_trip() {
        let dir = std::env::temp_dir().join("movie-recs-load-test");
        fs::create_dir_all(&dir).unwrap();
        let movies_path = dir.join("movies.txt");
        let ranks_path = dir.join("ranks.txt");
        fs::write(&movies_path, "Titanic 4 9\nTwilight 2 1\n").unwrap();
        fs::write(&ranks_path, "Titanic Twilight\nSofia 5 NA\n").unwrap();

        let (catalog, ratings) = load_from_files(&movies_path, &ranks_path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.num_evaluations(), 2);
        assert_eq!(ratings.len(), 1);
        assert!(ratings.contains_user("Sofia"));
    }
}
