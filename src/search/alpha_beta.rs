//! Minimax with alpha-beta pruning.
//!
//! Each node receives a window `[alpha, beta]`: alpha is the value agent 0 can
//! already guarantee on the path from the root, beta the value the adversaries
//! can already hold it to. A max node stops expanding once its best value
//! exceeds beta, and a min node stops once alpha exceeds its best value. Both
//! comparisons are strict, so a subtree whose value ties a bound is still
//! expanded and the root value and action are exactly those of [`minimax`].
//!
//! [`minimax`]: super::minimax::minimax

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{SearchContext, SearchError, SearchOutcome};
use super::node::{evaluate_leaf, expandable_actions, wrap_agent, NodeKind};
use super::root::search_root;
use super::traits::{Evaluator, GameState};

/// Searches `context.search_depth()` full rounds ahead with alpha-beta pruning.
///
/// Returns the same value and root action as `minimax` on the same input,
/// having visited at most as many nodes.
#[must_use = "search returns the best action found"]
pub fn alpha_beta<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    search_root(context, state, evaluator, "alpha-beta", |context, child, alpha| {
        alpha_beta_value(context, child, evaluator, 1, 1, alpha, f64::INFINITY)
    })
}

#[allow(clippy::too_many_arguments)]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
fn alpha_beta_value<S, E>(
    context: &SearchContext,
    state: &S,
    evaluator: &E,
    agent: usize,
    ply: u8,
    mut alpha: f64,
    mut beta: f64,
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
                let value =
                    alpha_beta_value(context, &child, evaluator, agent + 1, ply + 1, alpha, beta)?;
                best = best.max(value);
                alpha = alpha.max(best);

                if best > beta {
                    break;
                }
            }
            Ok(best)
        }
        NodeKind::Adversary => {
            let mut best = f64::INFINITY;
            for action in expandable_actions(state, agent)?.as_ref() {
                let child = state.generate_successor(agent, action)?;
                let value =
                    alpha_beta_value(context, &child, evaluator, agent + 1, ply, alpha, beta)?;
                best = best.min(value);
                beta = beta.min(best);

                if alpha > best {
                    break;
                }
            }
            Ok(best)
        }
    }
}
