//! Movie similarity from categorical attribute matches.
//!
//! The score starts at zero and adds a fixed weight for every attribute two
//! movies share:
//!
//! | attribute | default weight |
//! |-----------|----------------|
//! | genre     | 0.3            |
//! | producer  | 0.5            |
//!
//! With the defaults the only attainable scores are 0.0, 0.3, 0.5 and 0.8.
//! Scores are not normalised or capped, and ties are left to the caller.

use crate::error::{RecommendError, Result};
use data_loader::Movie;
use serde::{Deserialize, Serialize};

/// Additive weights for each matching attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub genre: f32,
    pub producer: f32,
}

impl SimilarityWeights {
    pub const DEFAULT_GENRE: f32 = 0.3;
    pub const DEFAULT_PRODUCER: f32 = 0.5;

    pub fn new(genre: f32, producer: f32) -> Self {
        Self { genre, producer }
    }

    /// Score of a movie compared with itself
    pub fn max_score(&self) -> f32 {
        self.genre + self.producer
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GENRE, Self::DEFAULT_PRODUCER)
    }
}

/// Pure, stateless similarity function over two movies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimilarityScorer {
    weights: SimilarityWeights,
}

impl SimilarityScorer {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> SimilarityWeights {
        self.weights
    }

    /// Similarity of `a` and `b`.
    ///
    /// Symmetric, and `similarity(m, m)` is the maximum attainable score.
    /// Fails with `InvalidInput` if either record is malformed.
    pub fn similarity(&self, a: &Movie, b: &Movie) -> Result<f32> {
        for movie in [a, b] {
            if !movie.is_well_formed() {
                return Err(RecommendError::InvalidInput(format!(
                    "movie {} has an empty title",
                    movie.id
                )));
            }
        }

        let mut score = 0.0;
        if a.genre == b.genre {
            score += self.weights.genre;
        }
        if a.producer == b.producer {
            score += self.weights.producer;
        }
        Ok(score)
    }

    /// Same as [`similarity`](Self::similarity) for callers holding lookups
    /// that may have come back empty.
    pub fn similarity_opt(&self, a: Option<&Movie>, b: Option<&Movie>) -> Result<f32> {
        match (a, b) {
            (Some(a), Some(b)) => self.similarity(a, b),
            _ => Err(RecommendError::InvalidInput(
                "both movies are required".to_string(),
            )),
        }
    }
}
