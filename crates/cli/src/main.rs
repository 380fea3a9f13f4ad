use anyhow::{Context, Result};
use assembly::{build_engine, EngineConfig, StrategyKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::DataIndex;
use pipeline::{Catalog, SimilarityScorer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// movie-recs - pluggable movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Movie recommendations with content-based or collaborative filtering", long_about = None)]
struct Cli {
    /// Directory holding movies.dat (and optionally ratings.dat)
    #[arg(short, long, default_value = "data/demo")]
    data_dir: PathBuf,

    /// JSON engine configuration; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies for a seed title
    Recommend {
        /// Seed movie title (exact match)
        #[arg(long)]
        title: String,

        /// Strategy to use: content-based or collaborative
        #[arg(long)]
        strategy: Option<StrategyKind>,

        /// Number of recommendations to return
        #[arg(long)]
        top_k: Option<usize>,

        /// Show each recommendation's similarity to the seed
        #[arg(long)]
        explain: bool,
    },

    /// Show the similarity score of two catalog titles
    Similarity {
        /// First movie title
        #[arg(long)]
        first: String,

        /// Second movie title
        #[arg(long)]
        second: String,
    },

    /// Search for movies by title
    Search {
        /// Case-insensitive substring to look for
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!("Engine configuration: {:?}", config);

    let start = Instant::now();
    let data_index = Arc::new(
        DataIndex::load_from_files(&cli.data_dir)
            .with_context(|| format!("Failed to load catalog from {}", cli.data_dir.display()))?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Recommend {
            title,
            strategy,
            top_k,
            explain,
        } => {
            let mut config = config;
            if let Some(strategy) = strategy {
                config = config.with_strategy(strategy);
            }
            if let Some(top_k) = top_k {
                config = config.with_top_k(top_k);
            }
            handle_recommend(data_index, &config, &title, explain)?
        }
        Commands::Similarity { first, second } => {
            handle_similarity(&data_index, &config, &first, &second)?
        }
        Commands::Search { title } => handle_search(&data_index, &title),
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    data_index: Arc<DataIndex>,
    config: &EngineConfig,
    title: &str,
    explain: bool,
) -> Result<()> {
    let engine = build_engine(config, data_index.clone()).context("Failed to assemble engine")?;

    let recommendations = engine
        .recommend(title)
        .with_context(|| format!("No recommendations for '{}'", title))?;

    println!(
        "{}",
        format!("Because you watched {} ({}):", title, engine.filter_name())
            .bold()
            .blue()
    );
    if recommendations.is_empty() {
        println!("  (nothing to recommend)");
        return Ok(());
    }

    let scorer = SimilarityScorer::new(config.weights);
    let seed = data_index.find_movie(title).ok();

    for (rank, rec) in recommendations.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), rec);
        if explain {
            let score = scorer.similarity_opt(seed, data_index.find_by_title(rec));
            match score {
                Ok(score) => println!("   similarity to seed: {:.2}", score),
                Err(_) => println!("   similarity to seed: n/a (not in catalog)"),
            }
        }
    }

    Ok(())
}

/// Handle the 'similarity' command
fn handle_similarity(
    data_index: &DataIndex,
    config: &EngineConfig,
    first: &str,
    second: &str,
) -> Result<()> {
    let a = data_index.find_movie(first)?;
    let b = data_index.find_movie(second)?;

    let scorer = SimilarityScorer::new(config.weights);
    let score = scorer.similarity(a, b)?;

    println!(
        "{} [{} / {}] vs {} [{} / {}]",
        a.title.bold(),
        a.genre,
        a.producer,
        b.title.bold(),
        b.genre,
        b.producer
    );
    println!(
        "{}Similarity: {:.2} (max {:.2})",
        "• ".cyan(),
        score,
        scorer.weights().max_score()
    );
    Ok(())
}

/// Handle the 'search' command
fn handle_search(data_index: &DataIndex, title: &str) {
    let matches = data_index.search_titles(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
        return;
    }

    for movie in matches.iter().take(20) {
        println!(
            "{}: {} [{} / {}]",
            movie.id, movie.title, movie.genre, movie.producer
        );
    }
}
