//! Co-occurrence ranking: "users who liked this also liked"
//!
//! ## Algorithm
//! 1. Resolve the seed title to a catalog movie
//! 2. Find the users who rated the seed highly (>= threshold)
//! 3. For each of those users, count every other movie they also rated highly
//! 4. Rank movies by that count, ties broken by catalog order
//!
//! Counting is done with a rayon fold/reduce over the seed's fans, so each
//! worker accumulates into its own map and the maps are merged at the end.

use crate::types::RankedMovie;
use data_loader::{DataIndex, MovieId, UserId};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ranks movies by how many of the seed's fans also liked them
#[derive(Debug, Clone)]
pub struct CoOccurrenceRanker {
    /// Shared reference to the data index (read-only, so no Mutex needed)
    data_index: Arc<DataIndex>,

    /// Minimum rating to consider a movie "liked"
    high_rating_threshold: f32,

    /// Minimum number of shared fans for a movie to be ranked at all
    min_support: u32,
}

impl CoOccurrenceRanker {
    pub fn new(data_index: Arc<DataIndex>) -> Self {
        Self {
            data_index,
            high_rating_threshold: 4.0,
            min_support: 1,
        }
    }

    /// Configure the high rating threshold (default: 4.0)
    pub fn with_high_rating_threshold(mut self, threshold: f32) -> Self {
        self.high_rating_threshold = threshold;
        self
    }

    /// Configure the minimum co-occurrence count (default: 1)
    pub fn with_min_support(mut self, min: u32) -> Self {
        self.min_support = min;
        self
    }

    /// Rank the catalog against a seed title.
    ///
    /// Returns `None` when the title is not in the catalog. A known title
    /// nobody rated highly yields an empty ranking.
    #[instrument(skip(self))]
    pub fn rank_by_title(&self, title: &str) -> Option<Vec<RankedMovie>> {
        let seed = self.data_index.find_by_title(title)?;

        let fans = self.find_fans(seed.id);
        debug!("Found {} fans of movie {}", fans.len(), seed.id);

        let counts = self.co_occurrence_counts(&fans, seed.id);

        let mut ranked: Vec<(MovieId, u32)> = counts
            .into_iter()
            .filter(|&(_, count)| count >= self.min_support)
            .collect();

        // count DESC, then catalog order
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1).then_with(|| {
                self.data_index
                    .catalog_position(a.0)
                    .cmp(&self.data_index.catalog_position(b.0))
            })
        });

        let ranking: Vec<RankedMovie> = ranked
            .into_iter()
            .filter_map(|(movie_id, support)| {
                let movie = self.data_index.get_movie(movie_id)?;
                Some(RankedMovie {
                    movie_id,
                    title: movie.title.clone(),
                    support,
                })
            })
            .collect();

        debug!("Ranked {} co-occurring movies", ranking.len());
        Some(ranking)
    }

    /// Users who rated `movie_id` at or above the threshold
    fn find_fans(&self, movie_id: MovieId) -> HashSet<UserId> {
        self.data_index
            .get_movie_ratings(movie_id)
            .iter()
            .filter(|rating| rating.rating >= self.high_rating_threshold)
            .map(|rating| rating.user_id)
            .collect()
    }

    /// Per movie, how many of `fans` also rated it highly
    fn co_occurrence_counts(
        &self,
        fans: &HashSet<UserId>,
        seed_id: MovieId,
    ) -> HashMap<MovieId, u32> {
        fans.par_iter()
            .fold(HashMap::new, |mut local_counts, &user_id| {
                // a fan backs each movie once, however often they rated it
                let liked: HashSet<MovieId> = self
                    .data_index
                    .get_user_ratings(user_id)
                    .iter()
                    .filter(|rating| {
                        rating.movie_id != seed_id && rating.rating >= self.high_rating_threshold
                    })
                    .map(|rating| rating.movie_id)
                    .collect();

                for movie_id in liked {
                    *local_counts.entry(movie_id).or_insert(0) += 1;
                }
                local_counts
            })
            .reduce(HashMap::new, |mut acc, local_counts| {
                for (movie_id, count) in local_counts {
                    *acc.entry(movie_id).or_insert(0) += count;
                }
                acc
            })
    }
}
