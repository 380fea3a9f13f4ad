//! DataIndex building and validation.
//!
//! Parses the data files (in parallel with rayon), inserts everything into a
//! `DataIndex` and checks referential integrity before handing it out.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

impl DataIndex {
    /// Load a catalog from a directory holding `movies.dat` and, optionally,
    /// `ratings.dat`.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert movies in file order (this is the catalog order)
    /// 3. Insert ratings
    /// 4. Validate
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {}", data_dir.display());

        let movies_path = data_dir.join("movies.dat");
        let ratings_path = data_dir.join("ratings.dat");

        let (movies, ratings) = rayon::join(
            || parser::parse_movies(&movies_path),
            || {
                if ratings_path.exists() {
                    parser::parse_ratings(&ratings_path)
                } else {
                    debug!("No ratings file at {}", ratings_path.display());
                    Ok(Vec::new())
                }
            },
        );
        let movies = movies?;
        let ratings = ratings?;

        info!("Parsed {} movies, {} ratings", movies.len(), ratings.len());

        let index = Self::from_records(movies, ratings)?;
        info!("DataIndex successfully built and validated");
        Ok(index)
    }

    /// Build and validate an index from already-parsed records.
    pub fn from_records(movies: Vec<Movie>, ratings: Vec<Rating>) -> Result<Self> {
        let mut index = DataIndex::new();

        for movie in movies {
            index.insert_movie(movie)?;
        }

        for rating in ratings {
            index.insert_rating(rating);
        }

        index.validate()?;
        Ok(index)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - All rating.movie_id references exist in the catalog
    /// - Ratings are in valid range (1.0 - 5.0)
    pub fn validate(&self) -> Result<()> {
        self.user_ratings
            .par_iter()
            .flat_map(|(_, ratings)| ratings.par_iter())
            .try_for_each(|rating| {
                if !self.id_index.contains_key(&rating.movie_id) {
                    return Err(DataLoadError::MissingReference {
                        entity: "Movie".to_string(),
                        id: rating.movie_id,
                    });
                }
                if !(1.0..=5.0).contains(&rating.rating) {
                    return Err(DataLoadError::InvalidValue {
                        field: "rating".to_string(),
                        value: rating.rating.to_string(),
                    });
                }
                Ok(())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dataset(dir: &Path, movies: &str, ratings: Option<&str>) {
        fs::write(dir.join("movies.dat"), movies).unwrap();
        if let Some(ratings) = ratings {
            fs::write(dir.join("ratings.dat"), ratings).unwrap();
        }
    }

    #[test]
    fn test_load_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "1::Finding Dory::Animation::Pixar\n2::Happy Feet::Animation::Warner Bros\n",
            Some("10::1::5::0\n10::2::4::0\n11::1::3::0\n"),
        );

        let index = DataIndex::load_from_files(dir.path()).unwrap();
        let (movies, users, ratings) = index.counts();

        assert_eq!(movies, 2);
        assert_eq!(users, 2);
        assert_eq!(ratings, 3);
        assert_eq!(index.find_by_title("Happy Feet").unwrap().id, 2);
    }

    #[test]
    fn test_ratings_file_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "1::Finding Dory::Animation::Pixar\n", None);

        let index = DataIndex::load_from_files(dir.path()).unwrap();
        assert_eq!(index.counts(), (1, 0, 0));
    }

    #[test]
    fn test_missing_movies_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataIndex::load_from_files(dir.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_duplicate_movie_id_rejected() {
        let movies = vec![
            Movie::new(1, "Finding Dory", "Animation", "Pixar").unwrap(),
            Movie::new(1, "Finding Nemo", "Animation", "Pixar").unwrap(),
        ];
        let err = DataIndex::from_records(movies, Vec::new()).unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateMovie { id: 1, .. }));
    }

    #[test]
    fn test_rating_for_unknown_movie() {
        let movies = vec![Movie::new(1, "Finding Dory", "Animation", "Pixar").unwrap()];
        let ratings = vec![Rating {
            user_id: 1,
            movie_id: 42,
            rating: 4.0,
            timestamp: 0,
        }];

        let err = DataIndex::from_records(movies, ratings).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingReference { id: 42, .. }));
    }

    #[test]
    fn test_rating_out_of_range() {
        let movies = vec![Movie::new(1, "Finding Dory", "Animation", "Pixar").unwrap()];
        let ratings = vec![Rating {
            user_id: 1,
            movie_id: 1,
            rating: 7.5,
            timestamp: 0,
        }];

        let err = DataIndex::from_records(movies, ratings).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }
}
