//! Content-based filtering: recommend movies whose attributes resemble the
//! seed's.
//!
//! ## Algorithm
//! 1. Resolve the seed title through the catalog
//! 2. Score every other catalog movie against the seed (in parallel)
//! 3. Drop candidates below `min_score`
//! 4. Stable sort by score DESC, so equal scores keep catalog order
//! 5. Keep the top K titles

use crate::error::{ensure_title, Result};
use crate::filters::DEFAULT_TOP_K;
use crate::similarity::SimilarityScorer;
use crate::traits::{Catalog, Filter};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A candidate title with its similarity to the seed
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTitle {
    pub title: String,
    pub score: f32,
}

/// Ranks catalog movies by attribute similarity to the seed.
pub struct ContentBasedFilter {
    catalog: Arc<dyn Catalog>,
    scorer: SimilarityScorer,
    top_k: usize,
    min_score: f32,
}

impl ContentBasedFilter {
    /// Create a filter over `catalog` with default weights, K = 3 and no
    /// score threshold.
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            scorer: SimilarityScorer::default(),
            top_k: DEFAULT_TOP_K,
            min_score: 0.0,
        }
    }

    pub fn with_scorer(mut self, scorer: SimilarityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Configure how many titles to return (default: 3)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Configure the minimum score a candidate needs (default: 0.0)
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Every qualifying candidate with its score, best first.
    ///
    /// The seed itself is never a candidate.
    #[instrument(skip(self))]
    pub fn rank(&self, seed: &str) -> Result<Vec<ScoredTitle>> {
        let seed = ensure_title(seed)?;
        let seed_movie = self.catalog.find_movie(seed)?;
        let candidates = self.catalog.list_candidates();

        debug!(
            "Scoring {} candidates against movie {}",
            candidates.len(),
            seed_movie.id
        );

        let mut scored: Vec<ScoredTitle> = candidates
            .par_iter()
            .filter(|candidate| candidate.id != seed_movie.id)
            .map(|candidate| {
                self.scorer
                    .similarity(seed_movie, candidate)
                    .map(|score| ScoredTitle {
                        title: candidate.title.clone(),
                        score,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        scored.retain(|entry| entry.score >= self.min_score);

        // sort_by is stable: ties stay in catalog order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!("{} candidates passed the score threshold", scored.len());
        Ok(scored)
    }
}

impl Filter for ContentBasedFilter {
    fn name(&self) -> &str {
        "ContentBasedFilter"
    }

    fn get_recommendations(&self, seed: &str) -> Result<Vec<String>> {
        let mut ranked = self.rank(seed)?;
        ranked.truncate(self.top_k);
        Ok(ranked.into_iter().map(|entry| entry.title).collect())
    }
}
