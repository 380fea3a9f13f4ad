//! Recommendation core: similarity scoring, interchangeable filter
//! strategies, and the engine that delegates to one of them.
//!
//! ## Architecture
//! 1. An assembly step builds one [`Filter`] (content-based or collaborative)
//! 2. The filter is handed to a [`RecommendationEngine`]
//! 3. Callers ask the engine for recommendations by seed title
//! 4. The content-based filter ranks the catalog with [`SimilarityScorer`];
//!    the collaborative filter defers to a [`RankingProvider`]
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{ContentBasedFilter, RecommendationEngine};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(DataIndex::load_from_files(Path::new("data/demo"))?);
//! let engine = RecommendationEngine::new(
//!     ContentBasedFilter::new(catalog).with_top_k(5),
//! );
//!
//! let titles = engine.recommend("Finding Dory")?;
//! ```

pub mod error;
pub mod similarity;
pub mod traits;
pub mod providers;
pub mod filters;
pub mod engine;

// Re-export main types
pub use error::{RecommendError, Result};
pub use similarity::{SimilarityScorer, SimilarityWeights};
pub use traits::{Catalog, Filter, RankingProvider};
pub use filters::{CollaborativeFilter, ContentBasedFilter, ScoredTitle, DEFAULT_TOP_K};
pub use engine::RecommendationEngine;
