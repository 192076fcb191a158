//! Expectimax: adversaries are chance nodes that pick uniformly at random.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{SearchContext, SearchError, SearchOutcome};
use super::node::{evaluate_leaf, expandable_actions, wrap_agent, NodeKind};
use super::root::search_root;
use super::traits::{ActionList, Evaluator, GameState};

/// Searches `context.search_depth()` full rounds ahead, treating every
/// adversary as acting uniformly at random and independently of the others.
///
/// Agent 0 still maximizes, with the same first-listed tie-break as `minimax`.
#[must_use = "search returns the best action found"]
pub fn expectimax<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    search_root(context, state, evaluator, "expectimax", |context, child, _| {
        expectimax_value(context, child, evaluator, 1, 1)
    })
}

#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
fn expectimax_value<S, E>(
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
                best = best.max(expectimax_value(context, &child, evaluator, agent + 1, ply + 1)?);
            }
            Ok(best)
        }
        NodeKind::Adversary => {
            let actions = expandable_actions(state, agent)?;
            let mut total = 0.0;
            for action in actions.as_ref() {
                let child = state.generate_successor(agent, action)?;
                total += expectimax_value(context, &child, evaluator, agent + 1, ply)?;
            }
            Ok(total / actions.len() as f64)
        }
    }
}
