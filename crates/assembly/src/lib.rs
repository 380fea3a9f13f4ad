//! Assembly layer for the movie recommender.
//!
//! Decides, from an [`EngineConfig`], which filter strategy backs a
//! [`RecommendationEngine`](pipeline::RecommendationEngine) and builds it.
//! Selection happens once, at construction; the engine never swaps filters.

pub mod error;
pub mod config;
pub mod factory;

pub use error::ConfigError;
pub use config::{EngineConfig, StrategyKind};
pub use factory::{build_engine, build_filter, load_ranking_table};
