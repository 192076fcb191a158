use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::search::{GameState, SearchError};

use super::Agent;

/// A ghost that picks uniformly among its legal moves.
pub struct RandomGhost {
    index: usize,
    rng: StdRng,
}

impl RandomGhost {
    pub fn new(index: usize, seed: u64) -> Self {
        Self {
            index,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomGhost {
    fn index(&self) -> usize {
        self.index
    }

    fn get_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        state
            .legal_actions(self.index)
            .as_ref()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SearchError::InvalidState { agent: self.index })
    }
}
