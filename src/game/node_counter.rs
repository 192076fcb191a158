use std::time::Duration;

use crate::evaluate::EvaluationFunction;
use crate::pacman::PacmanState;
use crate::search::{SearchContext, SearchError, Strategy};

/// Nodes one strategy visited from one state at one depth.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeCount {
    pub depth: u8,
    pub strategy: Strategy,
    pub nodes: usize,
    pub leaf_evaluations: usize,
    pub duration: Duration,
}

impl NodeCount {
    pub fn nodes_per_second(&self) -> f64 {
        self.nodes as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Searches `state` with every strategy at each depth from 1 to `depth`.
pub fn count_nodes(
    state: &PacmanState,
    depth: u8,
    evaluation: EvaluationFunction,
) -> Result<Vec<NodeCount>, SearchError> {
    let mut counts = Vec::new();

    for depth in 1..=depth {
        for strategy in Strategy::ALL {
            let mut context = SearchContext::new(depth);
            strategy.search(&mut context, state, &evaluation)?;

            counts.push(NodeCount {
                depth,
                strategy,
                nodes: context.searched_node_count(),
                leaf_evaluations: context.leaf_evaluations(),
                duration: context.last_search_duration().unwrap_or_default(),
            });
        }
    }

    Ok(counts)
}
