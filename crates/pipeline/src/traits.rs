//! Capabilities the recommendation core consumes and exposes.
//!
//! - [`Filter`] is the strategy contract every recommender variant satisfies.
//! - [`Catalog`] is the movie lookup a content-based filter needs.
//! - [`RankingProvider`] is the behavioural ranking a collaborative filter
//!   delegates to.
//!
//! All three are `Send + Sync`: an engine shared across threads only ever
//! reads through them, so implementations must be safe for concurrent reads.

use crate::error::Result;
use data_loader::Movie;

/// Interchangeable recommendation strategy.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Ordered titles recommended for `seed`.
    ///
    /// # Errors
    /// * `InvalidInput` - empty seed title
    /// * `NotFound` - seed unknown to the backing data
    fn get_recommendations(&self, seed: &str) -> Result<Vec<String>>;
}

/// Read access to a movie catalog.
pub trait Catalog: Send + Sync {
    /// Resolve a title to its catalog entry, failing with `NotFound`.
    fn find_movie(&self, title: &str) -> Result<&Movie>;

    /// Every candidate movie, in catalog order. Calling it again restarts
    /// from the beginning.
    fn list_candidates(&self) -> &[Movie];
}

/// Ordered titles from a behavioural signal (co-occurrence, precomputed
/// tables, ...).
pub trait RankingProvider: Send + Sync {
    /// Titles ranked for `title`, best first, failing with `NotFound`.
    fn rank_by_title(&self, title: &str) -> Result<Vec<String>>;
}
