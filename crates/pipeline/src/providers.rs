//! Capability implementations for the data-loader and sources types.

use crate::error::{ensure_title, RecommendError, Result};
use crate::traits::{Catalog, RankingProvider};
use data_loader::{DataIndex, Movie};
use sources::{CoOccurrenceRanker, FixedRanking};

fn not_found(title: &str) -> RecommendError {
    RecommendError::NotFound(format!("no movie titled '{}'", title))
}

impl Catalog for DataIndex {
    fn find_movie(&self, title: &str) -> Result<&Movie> {
        let title = ensure_title(title)?;
        self.find_by_title(title).ok_or_else(|| not_found(title))
    }

    fn list_candidates(&self) -> &[Movie] {
        self.movies()
    }
}

impl RankingProvider for CoOccurrenceRanker {
    fn rank_by_title(&self, title: &str) -> Result<Vec<String>> {
        let title = ensure_title(title)?;
        let ranking = CoOccurrenceRanker::rank_by_title(self, title).ok_or_else(|| not_found(title))?;
        Ok(ranking.into_iter().map(|entry| entry.title).collect())
    }
}

impl RankingProvider for FixedRanking {
    fn rank_by_title(&self, title: &str) -> Result<Vec<String>> {
        let title = ensure_title(title)?;
        FixedRanking::rank_by_title(self, title)
            .map(|titles| titles.to_vec())
            .ok_or_else(|| not_found(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Rating;
    use std::sync::Arc;

    fn create_test_index() -> DataIndex {
        let mut index = DataIndex::new();
        index
            .insert_movie(Movie::new(1, "Finding Dory", "Animation", "Pixar").unwrap())
            .unwrap();
        index
            .insert_movie(Movie::new(2, "Ice Age", "Animation", "Blue Sky").unwrap())
            .unwrap();
        for user_id in 1..=2 {
            for movie_id in 1..=2 {
                index.insert_rating(Rating {
                    user_id,
                    movie_id,
                    rating: 5.0,
                    timestamp: 0,
                });
            }
        }
        index
    }

    #[test]
    fn test_catalog_lookup() {
        let index = create_test_index();

        assert_eq!(index.find_movie("Ice Age").unwrap().id, 2);
        assert_eq!(index.list_candidates().len(), 2);
        assert!(matches!(
            index.find_movie("Cars"),
            Err(RecommendError::NotFound(_))
        ));
        assert!(matches!(
            index.find_movie(""),
            Err(RecommendError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_co_occurrence_provider() {
        let ranker = CoOccurrenceRanker::new(Arc::new(create_test_index()));
        let provider: &dyn RankingProvider = &ranker;

        assert_eq!(provider.rank_by_title("Finding Dory").unwrap(), vec!["Ice Age"]);
        assert!(matches!(
            provider.rank_by_title("Cars"),
            Err(RecommendError::NotFound(_))
        ));
    }

    #[test]
    fn test_fixed_provider() {
        let ranking = FixedRanking::new().with_entry("Cars", ["Planes"]);
        let provider: &dyn RankingProvider = &ranking;

        assert_eq!(provider.rank_by_title("Cars").unwrap(), vec!["Planes"]);
        assert!(matches!(
            provider.rank_by_title("Up"),
            Err(RecommendError::NotFound(_))
        ));
        assert!(matches!(
            provider.rank_by_title("  "),
            Err(RecommendError::InvalidInput(_))
        ));
    }
}
