//! Collaborative filtering: recommend what other viewers of the seed liked.
//!
//! The ranking itself comes from an injected [`RankingProvider`]; this filter
//! validates the seed, keeps the provider's order and applies the top-K cut.

use crate::error::{ensure_title, Result};
use crate::filters::DEFAULT_TOP_K;
use crate::traits::{Filter, RankingProvider};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct CollaborativeFilter {
    ranking: Arc<dyn RankingProvider>,
    top_k: usize,
}

impl CollaborativeFilter {
    pub fn new(ranking: Arc<dyn RankingProvider>) -> Self {
        Self {
            ranking,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Configure how many titles to return (default: 3)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

impl Filter for CollaborativeFilter {
    fn name(&self) -> &str {
        "CollaborativeFilter"
    }

    #[instrument(skip(self))]
    fn get_recommendations(&self, seed: &str) -> Result<Vec<String>> {
        let seed = ensure_title(seed)?;

        let mut titles = self.ranking.rank_by_title(seed)?;
        debug!("Ranking provider returned {} titles", titles.len());

        titles.truncate(self.top_k);
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;
    use sources::FixedRanking;

    fn filter() -> CollaborativeFilter {
        let ranking = FixedRanking::new()
            .with_entry(
                "Finding Dory",
                ["Happy Feet", "Ice Age", "Shark Tale", "Cars", "Up"],
            )
            .with_entry("Heat", Vec::<String>::new());
        CollaborativeFilter::new(Arc::new(ranking))
    }

    #[test]
    fn test_keeps_provider_order() {
        assert_eq!(
            filter().get_recommendations("Finding Dory").unwrap(),
            vec!["Happy Feet", "Ice Age", "Shark Tale"]
        );
    }

    #[test]
    fn test_top_k() {
        let filter = filter().with_top_k(4);
        assert_eq!(
            filter.get_recommendations("Finding Dory").unwrap(),
            vec!["Happy Feet", "Ice Age", "Shark Tale", "Cars"]
        );
    }

    #[test]
    fn test_empty_ranking() {
        assert!(filter().get_recommendations("Heat").unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            filter().get_recommendations("Nonexistent Title"),
            Err(RecommendError::NotFound(_))
        ));
        assert!(matches!(
            filter().get_recommendations(""),
            Err(RecommendError::InvalidInput(_))
        ));
    }
}
