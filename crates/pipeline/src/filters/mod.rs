//! Concrete recommendation strategies.
//!
//! Each filter implements [`Filter`](crate::traits::Filter) and can be handed
//! to a [`RecommendationEngine`](crate::engine::RecommendationEngine).

pub mod content_based;
pub mod collaborative;

// Re-export for convenience
pub use content_based::{ContentBasedFilter, ScoredTitle};
pub use collaborative::CollaborativeFilter;

/// Number of titles a filter returns unless configured otherwise
pub const DEFAULT_TOP_K: usize = 3;
