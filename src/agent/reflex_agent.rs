use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::evaluate::reflex_evaluation;
use crate::pacman::{Direction, PacmanState};
use crate::search::{GameState, SearchError};

use super::Agent;

/// Looks one Pacman move ahead and plays the best-scoring move, choosing at
/// random among equally good ones.
pub struct ReflexAgent {
    rng: StdRng,
}

impl ReflexAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Every legal move that shares the highest reflex score, in listing order.
    pub fn best_actions(state: &PacmanState) -> Result<Vec<Direction>, SearchError> {
        let mut best = Vec::new();
        let mut best_score = f64::NEG_INFINITY;

        for action in state.legal_actions(0) {
            let score = reflex_evaluation(state, action)?;
            if score > best_score {
                best_score = score;
                best.clear();
            }
            if score == best_score {
                best.push(action);
            }
        }
        Ok(best)
    }
}

impl Agent<PacmanState> for ReflexAgent {
    fn index(&self) -> usize {
        0
    }

    fn get_action(&mut self, state: &PacmanState) -> Result<Direction, SearchError> {
        Self::best_actions(state)?
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::InvalidState { agent: 0 })
    }
}
