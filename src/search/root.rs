//! Root expansion shared by every strategy.
//!
//! The root is always agent 0 at ply 0. It is the only node that remembers
//! which action produced its value; every node below it returns a bare value.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{SearchContext, SearchError, SearchOutcome};
use super::node::{evaluate_leaf, expandable_actions, NodeKind};
use super::traits::{Evaluator, GameState};

/// Runs one complete search from `state`.
///
/// `child_value` scores a child of the root. Its last argument is the best
/// value the root can already guarantee, which alpha-beta uses as its alpha.
pub(super) fn search_root<S, E, F>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
    strategy: &str,
    child_value: F,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
    F: Fn(&SearchContext, &S, f64) -> Result<f64, SearchError> + Sync,
{
    debug!("{} search depth: {}", strategy, context.search_depth());
    context.reset_stats();

    let start = Instant::now();
    let outcome = expand_root(context, state, evaluator, &child_value)?;
    context.record_result(outcome.value, start.elapsed());

    debug!(
        "{} search finished: value {}, action {:?}, {} nodes",
        strategy,
        outcome.value,
        outcome.action,
        context.searched_node_count()
    );
    Ok(outcome)
}

#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
fn expand_root<S, E, F>(
    context: &SearchContext,
    state: &S,
    evaluator: &E,
    child_value: &F,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
    F: Fn(&SearchContext, &S, f64) -> Result<f64, SearchError> + Sync,
{
    context.increment_node_count();

    match NodeKind::classify(state, 0, 0, context.search_depth()) {
        NodeKind::Terminal | NodeKind::DepthExhausted => {
            let value = evaluate_leaf(context, evaluator, state);
            return Ok(SearchOutcome::leaf(value));
        }
        NodeKind::Max | NodeKind::Adversary => {}
    }

    let actions = expandable_actions(state, 0)?;
    let mut best_value = f64::NEG_INFINITY;
    let mut best_action = None;

    if context.is_parallel() {
        // Children get the full window; the comparison below stays serial so
        // the first-listed action still wins ties.
        let values = actions
            .as_ref()
            .par_iter()
            .map(|action| {
                let child = state.generate_successor(0, action)?;
                child_value(context, &child, f64::NEG_INFINITY)
            })
            .collect::<Result<Vec<f64>, SearchError>>()?;

        for (value, action) in values.into_iter().zip(actions.as_ref()) {
            update_best(value, action, &mut best_value, &mut best_action);
        }
    } else {
        for action in actions.as_ref() {
            let child = state.generate_successor(0, action)?;
            let value = child_value(context, &child, best_value)?;
            update_best(value, action, &mut best_value, &mut best_action);
        }
    }

    Ok(SearchOutcome {
        value: best_value,
        action: best_action,
    })
}

/// Updates the best value and action if `value` is strictly better.
fn update_best<A: Clone>(
    value: f64,
    candidate: &A,
    best_value: &mut f64,
    best_action: &mut Option<A>,
) {
    if best_action.is_none() || value > *best_value {
        *best_value = value;
        *best_action = Some(candidate.clone());
    }
}
