//! Error taxonomy for the recommendation core.
//!
//! Both variants are terminal for the call that produced them: nothing in
//! this crate retries, substitutes a default list, or swallows them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// Malformed or absent argument (empty title, malformed movie record)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Seed title absent from the catalog or ranking source
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, RecommendError>;

/// Reject empty or whitespace-only titles, returning the trimmed title.
pub(crate) fn ensure_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(RecommendError::InvalidInput(
            "title must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
