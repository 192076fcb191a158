//! Agent configuration resolved once, before any game is played.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::evaluate::EvaluationFunction;
use crate::search::Strategy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no {kind} is registered as `{name}`; options are: {options}")]
    UnconfiguredStrategy {
        kind: &'static str,
        name: String,
        options: &'static str,
    },
}

/// Settings for a tree-search Pacman agent.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentConfig {
    pub strategy: Strategy,
    pub depth: u8,
    pub evaluation: EvaluationFunction,
    pub parallel: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Minimax,
            depth: 2,
            evaluation: EvaluationFunction::Score,
            parallel: false,
        }
    }
}

impl AgentConfig {
    /// Resolves strategy and evaluation function names, failing on any name
    /// without a registered implementation.
    pub fn from_names(strategy: &str, evaluation: &str, depth: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            strategy: strategy.parse()?,
            depth,
            evaluation: evaluation.parse()?,
            ..Self::default()
        })
    }
}

/// Which kind of agent controls Pacman.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    /// Looks one move ahead with the reflex evaluator.
    Reflex,
    /// Runs a full tree search.
    Search(Strategy),
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Reflex => f.write_str("reflex"),
            AgentKind::Search(strategy) => write!(f, "{}", strategy),
        }
    }
}

impl FromStr for AgentKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reflex" => Ok(AgentKind::Reflex),
            _ => s
                .parse::<Strategy>()
                .map(AgentKind::Search)
                .map_err(|_| ConfigError::UnconfiguredStrategy {
                    kind: "agent",
                    name: s.to_string(),
                    options: "reflex, minimax, alpha-beta, expectimax",
                }),
        }
    }
}
