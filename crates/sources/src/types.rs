//! Shared types for ranking providers.

use data_loader::MovieId;
use serde::{Deserialize, Serialize};

/// One entry of a behavioural ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMovie {
    pub movie_id: MovieId,
    pub title: String,
    /// Number of users backing this entry
    pub support: u32,
}
