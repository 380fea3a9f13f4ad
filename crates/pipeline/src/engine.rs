//! The single entry point callers use to get recommendations.

use crate::error::{ensure_title, Result};
use crate::traits::Filter;
use std::fmt;
use tracing::{debug, instrument};

/// Forwards every request to the one [`Filter`] it was built with.
///
/// The filter is fixed for the engine's lifetime; use a new engine to switch
/// strategy. Calls are independent and the engine holds no other state, so a
/// shared engine can serve concurrent callers.
pub struct RecommendationEngine {
    filter: Box<dyn Filter>,
}

impl RecommendationEngine {
    pub fn new(filter: impl Filter + 'static) -> Self {
        Self::from_boxed(Box::new(filter))
    }

    pub fn from_boxed(filter: Box<dyn Filter>) -> Self {
        Self { filter }
    }

    /// Name of the active strategy
    pub fn filter_name(&self) -> &str {
        self.filter.name()
    }

    /// Titles recommended for `seed_title`, exactly as the filter returns them.
    ///
    /// An empty title is rejected with `InvalidInput` before the filter is
    /// consulted. Filter errors are returned unchanged.
    #[instrument(skip(self), fields(filter = self.filter.name()))]
    pub fn recommend(&self, seed_title: &str) -> Result<Vec<String>> {
        ensure_title(seed_title)?;

        let titles = self.filter.get_recommendations(seed_title)?;
        debug!("{} recommended {} titles", self.filter.name(), titles.len());
        Ok(titles)
    }
}

impl fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("filter", &self.filter.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a canned answer and counts how often it was asked
    struct StubFilter {
        answer: Result<Vec<String>>,
        calls: Arc<AtomicUsize>,
    }

    impl StubFilter {
        fn new(answer: Result<Vec<String>>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    answer,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl Filter for StubFilter {
        fn name(&self) -> &str {
            "StubFilter"
        }

        fn get_recommendations(&self, _seed: &str) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_returns_filter_output_unmodified() {
        let expected = titles(&["Shark Tale", "Happy Feet", "Ice Age"]);
        let (stub, calls) = StubFilter::new(Ok(expected.clone()));
        let engine = RecommendationEngine::new(stub);

        assert_eq!(engine.recommend("Finding Dory").unwrap(), expected);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(engine.filter_name(), "StubFilter");
    }

    #[test]
    fn test_empty_title_never_reaches_filter() {
        let (stub, calls) = StubFilter::new(Ok(titles(&["Ice Age"])));
        let engine = RecommendationEngine::new(stub);

        for seed in ["", "   "] {
            assert!(matches!(
                engine.recommend(seed),
                Err(RecommendError::InvalidInput(_))
            ));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_filter_errors_propagate_unchanged() {
        let error = RecommendError::NotFound("no movie titled 'Nonexistent Title'".to_string());
        let (stub, _) = StubFilter::new(Err(error.clone()));
        let engine = RecommendationEngine::new(stub);

        assert_eq!(engine.recommend("Nonexistent Title").unwrap_err(), error);
    }

    #[test]
    fn test_empty_result_is_ok() {
        let (stub, _) = StubFilter::new(Ok(Vec::new()));
        let engine = RecommendationEngine::new(stub);

        assert!(engine.recommend("Finding Dory").unwrap().is_empty());
    }

    #[test]
    fn test_debug_shows_filter_name() {
        let (stub, _) = StubFilter::new(Ok(Vec::new()));
        let engine = RecommendationEngine::new(stub);

        assert!(format!("{:?}", engine).contains("StubFilter"));
    }
}
