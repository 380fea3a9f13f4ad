//! Explicit composition: turn an [`EngineConfig`] into a ready engine.
//!
//! The chosen filter is constructed here and passed straight to the engine
//! constructor. Build one engine per configuration and share it by
//! reference; nothing in it is mutated after construction.

use crate::config::{EngineConfig, StrategyKind};
use crate::error::{ConfigError, Result};
use data_loader::DataIndex;
use pipeline::{
    CollaborativeFilter, ContentBasedFilter, Filter, RankingProvider, RecommendationEngine,
    SimilarityScorer,
};
use sources::{CoOccurrenceRanker, FixedRanking};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Build the filter selected by `config` over `catalog`.
pub fn build_filter(config: &EngineConfig, catalog: Arc<DataIndex>) -> Result<Box<dyn Filter>> {
    config.validate()?;

    let filter: Box<dyn Filter> = match config.strategy {
        StrategyKind::ContentBased => Box::new(
            ContentBasedFilter::new(catalog)
                .with_scorer(SimilarityScorer::new(config.weights))
                .with_top_k(config.top_k)
                .with_min_score(config.min_score),
        ),
        StrategyKind::Collaborative => {
            let ranking = build_ranking(config, catalog)?;
            Box::new(CollaborativeFilter::new(ranking).with_top_k(config.top_k))
        }
    };

    Ok(filter)
}

/// Build an engine delegating to the filter selected by `config`.
pub fn build_engine(config: &EngineConfig, catalog: Arc<DataIndex>) -> Result<RecommendationEngine> {
    let filter = build_filter(config, catalog)?;
    info!(
        "Assembled engine with {} (strategy: {}, top_k: {})",
        filter.name(),
        config.strategy,
        config.top_k
    );
    Ok(RecommendationEngine::from_boxed(filter))
}

fn build_ranking(config: &EngineConfig, catalog: Arc<DataIndex>) -> Result<Arc<dyn RankingProvider>> {
    match &config.ranking_table {
        Some(path) => {
            let table = load_ranking_table(path)?;
            info!("Loaded {} precomputed rankings from {}", table.len(), path.display());
            Ok(Arc::new(table))
        }
        None => Ok(Arc::new(
            CoOccurrenceRanker::new(catalog)
                .with_high_rating_threshold(config.high_rating_threshold)
                .with_min_support(config.min_support),
        )),
    }
}

/// Read a seed -> titles JSON table
pub fn load_ranking_table(path: &Path) -> Result<FixedRanking> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
