use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

use super::alpha_beta::alpha_beta;
use super::context::{SearchContext, SearchError, SearchOutcome};
use super::expectimax::expectimax;
use super::minimax::minimax;
use super::traits::{Evaluator, GameState};

/// The tree-search algorithms an agent can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Expectimax => "expectimax",
        }
    }

    /// Dispatches to the search function for this strategy.
    pub fn search<S, E>(
        self,
        context: &mut SearchContext,
        state: &S,
        evaluator: &E,
    ) -> Result<SearchOutcome<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        match self {
            Strategy::Minimax => minimax(context, state, evaluator),
            Strategy::AlphaBeta => alpha_beta(context, state, evaluator),
            Strategy::Expectimax => expectimax(context, state, evaluator),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(ConfigError::UnconfiguredStrategy {
                kind: "search strategy",
                name: s.to_string(),
                options: "minimax, alpha-beta, expectimax",
            }),
        }
    }
}
