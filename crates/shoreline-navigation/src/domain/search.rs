//! The bounded search loop.
//!
//! Each attempt draws one candidate from the shared sequence, prefilters the
//! dataset against its extent and counts crossed edges. The sequence is never
//! reset between attempts, so retries are as deterministic as the first try.

use shoreline_core::coastline::CoastlineDataset;
use shoreline_core::rng::{DeterministicRng, SeededSequence};
use tracing::{debug, info, warn};

use super::candidate::Candidate;
use super::config::SearchConfig;
use super::intersection::count_crossed_edges;
use super::location::Location;
use super::prefilter::features_in_extent;

/// Search state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchState {
    /// Still looking; `attempt` candidates have been rejected so far.
    Searching {
        /// Rejected attempts.
        attempt: u32,
    },
    /// A candidate crossed enough edges.
    Accepted {
        /// The accepted view.
        location: Location,
        /// Attempts used, including the accepted one.
        attempts: u32,
        /// Distinct edges crossed by the coastline.
        edges: usize,
    },
    /// Every attempt was rejected; the configured fallback was returned.
    Fallback {
        /// The fallback view, carrying the caller's seed.
        location: Location,
        /// Attempts used.
        attempts: u32,
    },
}

impl SearchState {
    /// The state a new search starts in.
    #[must_use]
    pub fn initial() -> Self {
        Self::Searching { attempt: 0 }
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A candidate was accepted after crossing `edges` edges.
    Accepted {
        /// Distinct edges crossed.
        edges: usize,
    },
    /// The attempt budget ran out.
    Fallback,
}

/// Terminal result of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// The location handed to the caller.
    pub location: Location,
    /// Attempts consumed.
    pub attempts: u32,
    /// Whether the location was found or is the fallback.
    pub termination: Termination,
}

/// One search over one dataset for one seed.
pub struct CoastalSearch<'a> {
    dataset: &'a CoastlineDataset,
    config: &'a SearchConfig,
    rng: &'a mut dyn DeterministicRng,
    seed: i64,
}

impl<'a> CoastalSearch<'a> {
    /// Prepares a search. `rng` must be exclusive to this search.
    #[must_use]
    pub fn new(
        dataset: &'a CoastlineDataset,
        config: &'a SearchConfig,
        rng: &'a mut dyn DeterministicRng,
        seed: i64,
    ) -> Self {
        Self {
            dataset,
            config,
            rng,
            seed,
        }
    }

    /// Advances the state machine by one attempt. Terminal states are
    /// returned unchanged.
    pub fn step(&mut self, state: SearchState) -> SearchState {
        let SearchState::Searching { attempt } = state else {
            return state;
        };

        let candidate = Candidate::generate(&mut *self.rng, self.config);
        let nearby = features_in_extent(self.dataset, &candidate.view_extent);
        let edges = count_crossed_edges(&candidate, &nearby, self.config.inset_ratio);
        let attempts = attempt + 1;

        if edges >= self.config.min_intersections {
            return SearchState::Accepted {
                location: candidate.into_location(self.seed),
                attempts,
                edges,
            };
        }

        debug!(
            attempt = attempts,
            edges,
            nearby = nearby.len(),
            "candidate rejected"
        );

        if attempts >= self.config.max_attempts {
            SearchState::Fallback {
                location: self.fallback_location(),
                attempts,
            }
        } else {
            SearchState::Searching { attempt: attempts }
        }
    }

    /// Runs the loop until it accepts a candidate or exhausts the attempt
    /// budget.
    pub fn run(mut self) -> SearchOutcome {
        let mut state = SearchState::initial();
        loop {
            state = self.step(state);
            match state {
                SearchState::Searching { .. } => {}
                SearchState::Accepted {
                    location,
                    attempts,
                    edges,
                } => {
                    info!(
                        seed = self.seed,
                        lon = location.lon(),
                        lat = location.lat(),
                        zoom = location.zoom,
                        rotation = location.rotation,
                        attempts,
                        edges,
                        "coastal location found"
                    );
                    return SearchOutcome {
                        location,
                        attempts,
                        termination: Termination::Accepted { edges },
                    };
                }
                SearchState::Fallback { location, attempts } => {
                    warn!(seed = self.seed, attempts, "using fallback coastal location");
                    return SearchOutcome {
                        location,
                        attempts,
                        termination: Termination::Fallback,
                    };
                }
            }
        }
    }

    fn fallback_location(&self) -> Location {
        let fallback = &self.config.fallback;
        Location {
            center: [fallback.center.0, fallback.center.1],
            zoom: fallback.zoom,
            rotation: fallback.rotation,
            seed: self.seed,
        }
    }
}

/// Runs a complete search for `seed` with a fresh [`SeededSequence`].
#[must_use]
pub fn search_seed(dataset: &CoastlineDataset, config: &SearchConfig, seed: i64) -> SearchOutcome {
    let mut rng = SeededSequence::new(seed);
    run_search(dataset, config, &mut rng, seed)
}

/// Runs a complete search for `seed` over `dataset`, drawing from `rng`.
pub fn run_search(
    dataset: &CoastlineDataset,
    config: &SearchConfig,
    rng: &mut dyn DeterministicRng,
    seed: i64,
) -> SearchOutcome {
    CoastalSearch::new(dataset, config, rng, seed).run()
}
