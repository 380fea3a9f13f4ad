//! A ranking read from a fixed seed -> titles table.
//!
//! Useful when the behavioural data lives elsewhere and has already been
//! reduced to ordered lists, e.g. a JSON export:
//!
//! ```json
//! { "Finding Dory": ["Happy Feet", "Ice Age", "Shark Tale"] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Precomputed rankings keyed by seed title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedRanking {
    table: HashMap<String, Vec<String>>,
}

impl FixedRanking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the ranking for `seed` (builder pattern)
    pub fn with_entry<I, S>(mut self, seed: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .insert(seed.into(), titles.into_iter().map(Into::into).collect());
        self
    }

    /// The stored ranking for `title`, or `None` for an unknown seed
    pub fn rank_by_title(&self, title: &str) -> Option<&[String]> {
        self.table.get(title.trim()).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_entry() {
        let ranking = FixedRanking::new()
            .with_entry("Finding Dory", ["Happy Feet", "Ice Age", "Shark Tale"]);

        assert_eq!(
            ranking.rank_by_title("Finding Dory").unwrap(),
            &["Happy Feet", "Ice Age", "Shark Tale"]
        );
        assert!(ranking.rank_by_title("Cars").is_none());
        assert_eq!(ranking.len(), 1);
    }

    #[test]
    fn test_deserialize_from_json() {
        let ranking: FixedRanking =
            serde_json::from_str(r#"{ "Cars": ["Planes", "Turbo"], "Up": [] }"#).unwrap();

        assert_eq!(ranking.rank_by_title("Cars").unwrap(), &["Planes", "Turbo"]);
        assert_eq!(ranking.rank_by_title("Up").unwrap().len(), 0);
    }
}
