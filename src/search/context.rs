use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use thiserror::Error;

use super::traits::IllegalActionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("illegal action during search: {0}")]
    IllegalAction(#[from] IllegalActionError),
    #[error("agent {agent} has no legal actions in a non-terminal state")]
    InvalidState { agent: usize },
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// The backed-up value of a search and, at the root, the action achieving it.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    pub value: f64,
    pub action: Option<A>,
}

impl<A> SearchOutcome<A> {
    /// An outcome for a root that was evaluated without expanding it.
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            action: None,
        }
    }
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

impl SearchConfig {
    fn new(depth: u8, parallel: bool) -> Self {
        Self { depth, parallel }
    }
}

/// Statistics collected during search.
struct SearchStats {
    node_count: AtomicUsize,
    leaf_evaluations: AtomicUsize,
    last_value: Option<f64>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            node_count: AtomicUsize::new(0),
            leaf_evaluations: AtomicUsize::new(0),
            last_value: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.node_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_leaf(&self) {
        self.leaf_evaluations.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.last_value = None;
        self.last_duration = None;
        self.node_count.store(0, Ordering::SeqCst);
        self.leaf_evaluations.store(0, Ordering::SeqCst);
    }

    fn record_result(&mut self, value: f64, duration: Duration) {
        self.last_value = Some(value);
        self.last_duration = Some(duration);
    }

    fn count(&self) -> usize {
        self.node_count.load(Ordering::SeqCst)
    }

    fn leaf_evaluations(&self) -> usize {
        self.leaf_evaluations.load(Ordering::SeqCst)
    }
}

/// Depth budget and instrumentation shared by every node of one search.
///
/// Counters are atomic so the parallel root search can update them from
/// worker threads.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig::new(depth, false),
            stats: SearchStats::new(),
        }
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig::new(depth, parallel),
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Every node entered by the last search, root and leaves included.
    pub fn searched_node_count(&self) -> usize {
        self.stats.count()
    }

    pub fn leaf_evaluations(&self) -> usize {
        self.stats.leaf_evaluations()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.stats.last_value
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub(super) fn increment_node_count(&self) {
        self.stats.increment();
    }

    pub(super) fn increment_leaf_evaluations(&self) {
        self.stats.increment_leaf();
    }

    pub(super) fn record_result(&mut self, value: f64, duration: Duration) {
        self.stats.record_result(value, duration);
    }
}
