//! Parser for the catalog data files.
//!
//! Both files use `::` as the field separator:
//! - movies.dat: movieId::title::genre::producer
//! - ratings.dat: userId::movieId::rating::timestamp
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

const SEPARATOR: &str = "::";

/// Read a data file into lines.
///
/// Files are expected to be UTF-8; anything else is decoded as ISO-8859-1
/// (Latin-1), where each byte maps directly to a Unicode code point.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let bytes = std::fs::read(path)?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warn!("{} is not valid UTF-8, decoding as Latin-1", path.display());
            err.into_bytes().iter().map(|&b| b as char).collect()
        }
    };

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Yields `(line_no, fields)` for every non-blank, non-comment line.
fn records(lines: &[String]) -> impl Iterator<Item = (usize, Vec<&str>)> {
    lines.iter().enumerate().filter_map(|(idx, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some((idx + 1, trimmed.split(SEPARATOR).map(str::trim).collect()))
        }
    })
}

fn check_field_count(file: &str, line: usize, fields: &[&str], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(DataLoadError::FieldCountMismatch {
            file: file.to_string(),
            expected,
            found: fields.len(),
            line,
        });
    }
    Ok(())
}

fn parse_field<T>(file: &str, line: usize, name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", name, e),
    })
}

fn non_empty<'a>(file: &str, line: usize, name: &str, raw: &'a str) -> Result<&'a str> {
    if raw.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Missing {}", name),
        });
    }
    Ok(raw)
}

/// Parse movie records from already-read lines.
pub fn parse_movie_lines(lines: &[String]) -> Result<Vec<Movie>> {
    const FILE: &str = "movies.dat";
    let mut movies = Vec::new();

    for (line_no, fields) in records(lines) {
        check_field_count(FILE, line_no, &fields, 4)?;

        let movie = Movie {
            id: parse_field(FILE, line_no, "movieId", fields[0])?,
            title: non_empty(FILE, line_no, "title", fields[1])?.to_string(),
            genre: non_empty(FILE, line_no, "genre", fields[2])?.to_string(),
            producer: non_empty(FILE, line_no, "producer", fields[3])?.to_string(),
        };
        movies.push(movie);
    }

    Ok(movies)
}

/// Parse rating records from already-read lines.
pub fn parse_rating_lines(lines: &[String]) -> Result<Vec<Rating>> {
    const FILE: &str = "ratings.dat";
    let mut ratings = Vec::new();

    for (line_no, fields) in records(lines) {
        check_field_count(FILE, line_no, &fields, 4)?;

        ratings.push(Rating {
            user_id: parse_field(FILE, line_no, "userId", fields[0])?,
            movie_id: parse_field(FILE, line_no, "movieId", fields[1])?,
            rating: parse_field(FILE, line_no, "rating", fields[2])?,
            timestamp: parse_field(FILE, line_no, "timestamp", fields[3])?,
        });
    }

    Ok(ratings)
}

/// Parse the movies.dat file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    parse_movie_lines(&read_lines(path)?)
}

/// Parse the ratings.dat file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    parse_rating_lines(&read_lines(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_movies() {
        let movies = parse_movie_lines(&lines(
            "# id::title::genre::producer\n\
             1::Finding Dory::Animation::Pixar\n\
             \n\
             2::Ice Age::Animation::Blue Sky\n",
        ))
        .unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Finding Dory");
        assert_eq!(movies[0].producer, "Pixar");
        assert_eq!(movies[1].id, 2);
        assert_eq!(movies[1].producer, "Blue Sky");
    }

    #[test]
    fn test_parse_movies_wrong_field_count() {
        let err = parse_movie_lines(&lines("1::Finding Dory::Animation")).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 4, found: 3, line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_movies_empty_title() {
        let err = parse_movie_lines(&lines("1::::Animation::Pixar")).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_parse_ratings() {
        let ratings = parse_rating_lines(&lines("7::1::4.5::978300760\n8::2::3::978300761")).unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].user_id, 7);
        assert_eq!(ratings[0].rating, 4.5);
        assert_eq!(ratings[1].timestamp, 978300761);
    }

    #[test]
    fn test_parse_ratings_bad_number() {
        let err = parse_rating_lines(&lines("1::1::five::0")).unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "ratings.dat");
                assert_eq!(line, 1);
                assert!(reason.contains("rating"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_latin1_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.dat");
        // "Amélie" with é as the single ISO-8859-1 byte 0xE9
        let mut bytes = b"1::Am".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"lie::Romance::Claudie Ossard\n");
        std::fs::write(&path, bytes).unwrap();

        let movies = parse_movies(&path).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Amélie");
        assert_eq!(movies[0].producer, "Claudie Ossard");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_movies(Path::new("does/not/exist/movies.dat")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
