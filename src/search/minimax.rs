//! Plain minimax: agent 0 maximizes, every other agent minimizes.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{SearchContext, SearchError, SearchOutcome};
use super::node::{evaluate_leaf, expandable_actions, wrap_agent, NodeKind};
use super::root::search_root;
use super::traits::{Evaluator, GameState};

/// Searches `context.search_depth()` full rounds ahead and returns the minimax
/// value of `state` together with the root action achieving it.
///
/// When several root actions share the best value, the first one listed by
/// the oracle is returned.
///
/// # Returns
///
/// - `Ok(outcome)` - `outcome.action` is `None` only if the root was
///   evaluated directly (terminal, or a depth of 0)
/// - `Err(SearchError::InvalidState)` - some live node had no legal actions
/// - `Err(SearchError::IllegalAction)` - the oracle rejected one of its own actions
#[must_use = "search returns the best action found"]
pub fn minimax<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    search_root(context, state, evaluator, "minimax", |context, child, _| {
        minimax_value(context, child, evaluator, 1, 1)
    })
}

#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
fn minimax_value<S, E>(
    context: &SearchContext,
    state: &S,
    evaluator: &E,
    agent: usize,
    ply: u8,
) -> Result<f64, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    context.increment_node_count();
    let agent = wrap_agent(state, agent);

    match NodeKind::classify(state, agent, ply, context.search_depth()) {
        NodeKind::Terminal | NodeKind::DepthExhausted => Ok(evaluate_leaf(context, evaluator, state)),
        NodeKind::Max => {
            let mut best = f64::NEG_INFINITY;
            for action in expandable_actions(state, agent)?.as_ref() {
                let child = state.generate_successor(agent, action)?;
                best = best.max(minimax_value(context, &child, evaluator, agent + 1, ply + 1)?);
            }
            Ok(best)
        }
        NodeKind::Adversary => {
            let mut best = f64::INFINITY;
            for action in expandable_actions(state, agent)?.as_ref() {
                let child = state.generate_successor(agent, action)?;
                best = best.min(minimax_value(context, &child, evaluator, agent + 1, ply)?);
            }
            Ok(best)
        }
    }
}
