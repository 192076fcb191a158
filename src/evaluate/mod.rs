//! Leaf evaluation functions and the registry that names them.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::pacman::PacmanState;
use crate::search::{Evaluator, GameState};

mod better;
mod reflex;


pub use better::{better_evaluation, BetterEvaluator};
pub use reflex::{reflex_evaluation, CAUGHT_SCORE, IMPROVEMENT_SCORE};

/// The default evaluator: the game's own score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    #[inline]
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Evaluation functions that can be selected by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvaluationFunction {
    Score,
    Better,
}

impl EvaluationFunction {
    pub const ALL: [EvaluationFunction; 2] = [EvaluationFunction::Score, EvaluationFunction::Better];

    pub fn name(self) -> &'static str {
        match self {
            EvaluationFunction::Score => "score",
            EvaluationFunction::Better => "better",
        }
    }
}

impl fmt::Display for EvaluationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvaluationFunction {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" | "scoreEvaluationFunction" => Ok(EvaluationFunction::Score),
            "better" | "betterEvaluationFunction" => Ok(EvaluationFunction::Better),
            _ => Err(ConfigError::UnconfiguredStrategy {
                kind: "evaluation function",
                name: s.to_string(),
                options: "score, better",
            }),
        }
    }
}

impl Evaluator<PacmanState> for EvaluationFunction {
    #[inline]
    fn evaluate(&self, state: &PacmanState) -> f64 {
        match self {
            EvaluationFunction::Score => ScoreEvaluator.evaluate(state),
            EvaluationFunction::Better => better_evaluation(state),
        }
    }
}
