//! # Sources Crate
//!
//! Behavioural ranking providers used by collaborative filtering.
//!
//! ## Components
//!
//! ### CoOccurrenceRanker
//! "Users who liked this also liked...": ranks catalog movies by how many
//! fans of a seed movie also rated them highly.
//!
//! ### FixedRanking
//! A precomputed seed -> ordered titles table, loadable with serde.
//!
//! Both return `None` for a seed they know nothing about; callers decide how
//! to report that.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::CoOccurrenceRanker;
//! use data_loader::DataIndex;
//! use std::sync::Arc;
//!
//! let data_index = Arc::new(DataIndex::load_from_files(Path::new("data/demo"))?);
//! let ranker = CoOccurrenceRanker::new(data_index).with_min_support(2);
//!
//! for entry in ranker.rank_by_title("Finding Dory").unwrap_or_default() {
//!     println!("{} ({} shared fans)", entry.title, entry.support);
//! }
//! ```

pub mod types;
pub mod co_occurrence;
pub mod fixed;

pub use types::RankedMovie;
pub use co_occurrence::CoOccurrenceRanker;
pub use fixed::FixedRanking;
