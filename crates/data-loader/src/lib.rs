//! # Data Loader Crate
//!
//! Loads and indexes the movie catalog used by the recommenders.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, DataIndex)
//! - **parser**: Parse `::`-separated .dat files into Rust structs
//! - **index**: Build and validate a DataIndex from the parsed records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use std::path::Path;
//!
//! let index = DataIndex::load_from_files(Path::new("data/demo"))?;
//!
//! let dory = index.find_by_title("Finding Dory").unwrap();
//! println!("{} is produced by {}", dory.title, dory.producer);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{DataIndex, Movie, MovieId, Rating, UserId};
