//! Core domain types for the movie catalog.
//!
//! `Movie` and `Rating` are plain immutable values. `DataIndex` owns them and
//! hands out references; nothing outside the loader mutates a catalog once
//! it has been built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{DataLoadError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user who rated movies
pub type UserId = u32;

/// Unique identifier for a movie, unique across a catalog
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A catalog entry.
///
/// `genre` and `producer` are free-form categorical values; two movies share
/// a category when the strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub producer: String,
}

impl Movie {
    /// Build a movie, rejecting an empty (or whitespace-only) title.
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        producer: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DataLoadError::InvalidValue {
                field: "title".to_string(),
                value: title,
            });
        }

        Ok(Self {
            id,
            title,
            genre: genre.into(),
            producer: producer.into(),
        })
    }

    /// A record is well-formed when it has a non-empty title.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A single rating from a user for a movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value from 1.0 to 5.0
    pub rating: f32,
    /// Unix timestamp when rating was made
    pub timestamp: i64,
}

// =============================================================================
// DataIndex
// =============================================================================

/// In-memory catalog plus the rating indices built from it.
///
/// Movies are stored in insertion order, which is the "catalog order" used
/// to break ranking ties. Lookups by id and by exact title go through
/// `HashMap` indices into that vector.
#[derive(Debug, Default)]
pub struct DataIndex {
    pub(crate) movies: Vec<Movie>,
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// First catalog position of each title
    pub(crate) title_index: HashMap<String, usize>,

    /// All ratings made by each user
    pub(crate) user_ratings: HashMap<UserId, Vec<Rating>>,
    /// All ratings received by each movie
    pub(crate) movie_ratings: HashMap<MovieId, Vec<Rating>>,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.id_index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Find a movie by its exact title.
    ///
    /// Surrounding whitespace in `title` is ignored. When several entries
    /// share a title the earliest one in catalog order wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.title_index
            .get(title.trim())
            .map(|&pos| &self.movies[pos])
    }

    /// All movies, in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Position of a movie in catalog order
    pub fn catalog_position(&self, id: MovieId) -> Option<usize> {
        self.id_index.get(&id).copied()
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Exact matches come first, then the remaining hits in catalog order.
    pub fn search_titles(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(bool, &Movie)> = self
            .movies
            .iter()
            .filter_map(|movie| {
                let title = movie.title.to_lowercase();
                if title == needle {
                    Some((true, movie))
                } else if title.contains(&needle) {
                    Some((false, movie))
                } else {
                    None
                }
            })
            .collect();

        // stable: catalog order survives within each group
        hits.sort_by_key(|(exact, _)| !exact);
        hits.into_iter().map(|(_, movie)| movie).collect()
    }

    /// Get all ratings made by a user
    pub fn get_user_ratings(&self, user_id: UserId) -> &[Rating] {
        self.user_ratings
            .get(&user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all ratings for a movie
    pub fn get_movie_ratings(&self, movie_id: MovieId) -> &[Rating] {
        self.movie_ratings
            .get(&movie_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Insert a movie at the end of the catalog.
    ///
    /// Fails if the id is already taken or the record has an empty title.
    pub fn insert_movie(&mut self, movie: Movie) -> Result<()> {
        if !movie.is_well_formed() {
            return Err(DataLoadError::InvalidValue {
                field: "title".to_string(),
                value: movie.title,
            });
        }
        if self.id_index.contains_key(&movie.id) {
            return Err(DataLoadError::DuplicateMovie {
                id: movie.id,
                title: movie.title,
            });
        }

        let pos = self.movies.len();
        self.id_index.insert(movie.id, pos);
        self.title_index
            .entry(movie.title.trim().to_string())
            .or_insert(pos);
        self.movies.push(movie);
        Ok(())
    }

    /// Insert a rating and update indices
    pub fn insert_rating(&mut self, rating: Rating) {
        self.user_ratings
            .entry(rating.user_id)
            .or_default()
            .push(rating);

        self.movie_ratings
            .entry(rating.movie_id)
            .or_default()
            .push(rating);
    }

    /// (movies, users with ratings, ratings)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_ratings = self.user_ratings.values().map(|v| v.len()).sum();
        (self.movies.len(), self.user_ratings.len(), total_ratings)
    }
}
