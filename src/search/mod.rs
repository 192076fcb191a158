//! Adversarial tree search for one maximizing agent against any number of
//! adversaries.
//!
//! # Depth
//!
//! Depth is counted in plies, where one ply is a full round in which every
//! agent moves once. The ply counter only advances when control passes from
//! agent 0 to agent 1, and the budget is checked when control wraps back to
//! agent 0. A search of depth `D` over `N` agents therefore recurses at most
//! `D * N` levels.
//!
//! # Strategies
//!
//! - [`minimax`]: adversaries minimize agent 0's value.
//! - [`alpha_beta`]: the same values as minimax, skipping subtrees that
//!   cannot change the root decision.
//! - [`expectimax`]: adversaries are chance nodes averaging uniformly over
//!   their legal actions.
//!
//! Every strategy is a stateless function of a state, an evaluator and a
//! [`SearchContext`] carrying the depth budget and node counters. Ties between
//! root actions go to the action the oracle lists first.
//!
//! # Parallel Search
//!
//! Root children can be searched in parallel with rayon. Values are collected
//! in listing order before the best one is picked, so the chosen action does
//! not depend on which worker finishes first.

mod alpha_beta;
mod context;
mod expectimax;
mod minimax;
mod node;
mod root;
mod strategy;
mod traits;

#[cfg(test)]
mod tests;

pub use alpha_beta::alpha_beta;
pub use context::{SearchContext, SearchError, SearchOutcome};
pub use expectimax::expectimax;
pub use minimax::minimax;
pub use strategy::Strategy;
pub use traits::{ActionList, Evaluator, GameState, IllegalActionError};
