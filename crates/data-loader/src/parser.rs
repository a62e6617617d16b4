//! Parsers for the two whitespace-delimited input tables.
//!
//! Movie attribute table: one movie per line,
//! `movieName attr1 attr2 ... attrN`.
//!
//! Rating table: a header line listing movie names (defining the slot
//! order of every user row), then one user per line,
//! `userName cell1 cell2 ... cellM` where each cell is a number or the
//! token `NA` for "not rated".
//!
//! These functions parse string content only; file access lives in
//! [`crate::load`]. Structural validation against the catalog (cell
//! counts, unknown movies) happens when the stores are built.

use crate::error::{DataLoadError, Result};

/// One row of the movie attribute table
#[derive(Debug, Clone)]
pub struct MovieRecord {
    pub name: String,
    pub attributes: Vec<f64>,
}

/// One row of the rating table body
#[derive(Debug, Clone)]
pub struct UserRow {
    pub name: String,
    /// `None` for an `NA` cell, `Some(value)` for a numeric rating
    pub cells: Vec<Option<f64>>,
    /// 1-based source line, kept for error reporting
    pub line: usize,
}

/// The parsed rating table: header order plus body rows
#[derive(Debug, Clone)]
pub struct RatingTable {
    pub movie_order: Vec<String>,
    pub rows: Vec<UserRow>,
}

/// Parse the movie attribute table.
///
/// Blank lines are skipped. Every data line must carry a movie name and
/// at least one attribute value; attribute-count uniformity is checked
/// later by `Catalog::from_records`, which knows the expected width.
pub fn parse_movie_table(content: &str) -> Result<Vec<MovieRecord>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let mut tokens = line.split_whitespace();

        let name = match tokens.next() {
            Some(name) => name.to_string(),
            None => continue, // Skip empty lines
        };

        let mut attributes = Vec::new();
        for token in tokens {
            let value = token.parse::<f64>().map_err(|e| DataLoadError::ParseError {
                line: line_no,
                reason: format!("Invalid attribute value '{}': {}", token, e),
            })?;
            attributes.push(value);
        }

        if attributes.is_empty() {
            return Err(DataLoadError::ParseError {
                line: line_no,
                reason: format!("Movie {} has no attribute values", name),
            });
        }

        records.push(MovieRecord { name, attributes });
    }

    Ok(records)
}

/// Parse the rating table: header first, then one row per user.
pub fn parse_rating_table(content: &str) -> Result<RatingTable> {
    let mut lines = content.lines().enumerate();

    // The first non-blank line is the header of movie names
    let movie_order = loop {
        match lines.next() {
            Some((_, line)) => {
                let names: Vec<String> =
                    line.split_whitespace().map(|s| s.to_string()).collect();
                if !names.is_empty() {
                    break names;
                }
            }
            None => {
                return Err(DataLoadError::EmptyTable {
                    table: "user ratings".to_string(),
                })
            }
        }
    };

    let mut rows = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let mut tokens = line.split_whitespace();

        let name = match tokens.next() {
            Some(name) => name.to_string(),
            None => continue, // Skip empty lines
        };

        let mut cells = Vec::new();
        for token in tokens {
            cells.push(parse_cell(token, line_no)?);
        }

        rows.push(UserRow {
            name,
            cells,
            line: line_no,
        });
    }

    Ok(RatingTable { movie_order, rows })
}

/// Parse a single rating cell: `NA` or a number
fn parse_cell(token: &str, line_no: usize) -> Result<Option<f64>> {
    if token == "NA" {
        return Ok(None);
    }
    let value = token.parse::<f64>().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid rating '{}': {}", token, e),
    })?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_table() {
        let content = "Titanic 4 9 8\nTwilight 2 1 5\n";
        let records = parse_movie_table(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Titanic");
        assert_eq!(records[0].attributes, vec![4.0, 9.0, 8.0]);
        assert_eq!(records[1].name, "Twilight");
    }

    #[test]
    fn test_parse_movie_table_skips_blank_lines() {
        let content = "\nTitanic 4 9\n\n  \nTwilight 2 1\n";
        let records = parse_movie_table(content).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_movie_table_bad_number() {
        let content = "Titanic 4 nine\n";
        let result = parse_movie_table(content);
        assert!(matches!(
            result,
            Err(DataLoadError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rating_table() {
        let content = "Titanic Twilight\nSofia 5 NA\nMichael NA 3\n";
        let table = parse_rating_table(content).unwrap();

        assert_eq!(table.movie_order, vec!["Titanic", "Twilight"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].name, "Sofia");
        assert_eq!(table.rows[0].cells, vec![Some(5.0), None]);
        assert_eq!(table.rows[1].cells, vec![None, Some(3.0)]);
    }

    #[test]
    fn test_parse_rating_table_empty() {
        let result = parse_rating_table("");
        assert!(matches!(result, Err(DataLoadError::EmptyTable { .. })));
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("NA", 1).unwrap(), None);
        assert_eq!(parse_cell("4", 1).unwrap(), Some(4.0));
        assert_eq!(parse_cell("4.5", 1).unwrap(), Some(4.5));
        assert!(parse_cell("n/a", 1).is_err());
    }
}
