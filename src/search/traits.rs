//! Core traits for multi-agent adversarial search.

use std::fmt::Debug;

use thiserror::Error;

/// Raised by an oracle when asked to apply an action it cannot apply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalActionError {
    #[error("agent {agent} cannot play {action} from this state")]
    NotLegal { agent: usize, action: String },
    #[error("agent {0} does not exist in this state")]
    UnknownAgent(usize),
    #[error("cannot generate a successor of a finished game")]
    GameOver,
}

/// A snapshot of a turn-based game with one maximizing agent (index 0) and
/// any number of adversaries (indices 1..N).
///
/// The search never mutates a state; it only asks for successors.
pub trait GameState: Clone + Send + Sync {
    type Action: Clone + Send + Sync + PartialEq + Debug;
    type Actions: ActionList<Self::Action>;

    /// Legal actions for `agent`. Order matters: ties at the root are broken in
    /// favour of the action listed first, so it must be deterministic.
    fn legal_actions(&self, agent: usize) -> Self::Actions;

    /// Returns the state reached after `agent` plays `action`.
    fn generate_successor(
        &self,
        agent: usize,
        action: &Self::Action,
    ) -> Result<Self, IllegalActionError>;

    /// Number of agents in play, always at least 1.
    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Current game score from the maximizing agent's point of view.
    fn score(&self) -> f64;

    #[inline]
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Scores a state at the bottom of the search. Higher favours agent 0.
///
/// Must be total over every reachable state, terminal ones included.
pub trait Evaluator<S: GameState>: Send + Sync {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S) -> f64 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Abstraction over action collections (Vec, SmallVec, etc.)
pub trait ActionList<A>: AsRef<[A]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<A: Send> ActionList<A> for Vec<A> {}

impl<A: Send> ActionList<A> for smallvec::SmallVec<[A; 5]> {}
