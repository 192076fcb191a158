//! The node state machine shared by every strategy.
//!
//! A node is identified by `(state, agent, ply)`. The agent index is reduced
//! modulo the agent count of the state it is applied to, so a wrap back to 0
//! is what starts the next ply. Only a max node increments the ply when it
//! hands control to agent 1; adversaries pass the ply through unchanged.

use super::context::{SearchContext, SearchError};
use super::traits::{ActionList, Evaluator, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NodeKind {
    /// Won or lost: evaluated regardless of the remaining depth.
    Terminal,
    /// Agent 0 to move with the depth budget spent.
    DepthExhausted,
    /// Agent 0 to move.
    Max,
    /// Any other agent to move. Minimizing or chance depending on strategy.
    Adversary,
}

impl NodeKind {
    pub(super) fn classify<S: GameState>(state: &S, agent: usize, ply: u8, depth: u8) -> Self {
        if state.is_terminal() {
            NodeKind::Terminal
        } else if agent == 0 {
            if ply >= depth {
                NodeKind::DepthExhausted
            } else {
                NodeKind::Max
            }
        } else {
            NodeKind::Adversary
        }
    }
}

/// Reduces an agent index against the live agent count of `state`.
#[inline]
pub(super) fn wrap_agent<S: GameState>(state: &S, agent: usize) -> usize {
    agent % state.num_agents().max(1)
}

/// Legal actions for `agent`, refusing to continue when a live state offers none.
#[inline]
pub(super) fn expandable_actions<S: GameState>(
    state: &S,
    agent: usize,
) -> Result<S::Actions, SearchError> {
    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return Err(SearchError::InvalidState { agent });
    }
    Ok(actions)
}

#[inline]
pub(super) fn evaluate_leaf<S, E>(context: &SearchContext, evaluator: &E, state: &S) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    context.increment_leaf_evaluations();
    evaluator.evaluate(state)
}
