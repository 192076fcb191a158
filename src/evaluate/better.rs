use crate::pacman::PacmanState;
use crate::search::{Evaluator, GameState};

const REMAINING_FOOD_WEIGHT: f64 = 4.0;
const NEAREST_FOOD_WEIGHT: f64 = 10.0;
const REMAINING_CAPSULE_WEIGHT: f64 = 20.0;
const ADJACENT_GHOST_PENALTY: f64 = 500.0;
const GHOST_PROXIMITY_WEIGHT: f64 = 2.0;
const SCARED_GHOST_WEIGHT: f64 = 200.0;

/// Scores a state from its score and the board around Pacman.
///
/// Finished games are worth their score. Otherwise, starting from the score:
/// every remaining food and capsule costs a little, being close to food is
/// worth a little, a dangerous ghost next to Pacman costs as much as losing,
/// other dangerous ghosts cost less the further away they are, and a scared
/// ghost Pacman can still reach in time is worth more the closer it is.
pub fn better_evaluation(state: &PacmanState) -> f64 {
    if state.is_terminal() {
        return state.score();
    }

    let pacman = state.pacman_position();
    let food = state.food().as_list();

    let mut value = state.score();
    value -= REMAINING_FOOD_WEIGHT * food.len() as f64;
    value -= REMAINING_CAPSULE_WEIGHT * state.capsules().len() as f64;

    if let Some(nearest) = food.iter().map(|&f| pacman.manhattan_distance(f)).min() {
        value += NEAREST_FOOD_WEIGHT / (1.0 + nearest as f64);
    }

    for ghost in state.ghost_states() {
        let distance = pacman.manhattan_distance(ghost.position());
        if ghost.scared_timer() as usize > distance {
            value += SCARED_GHOST_WEIGHT / (1.0 + distance as f64);
        } else if distance <= 1 {
            value -= ADJACENT_GHOST_PENALTY;
        } else {
            value -= GHOST_PROXIMITY_WEIGHT / distance as f64;
        }
    }

    value
}

/// [`better_evaluation`] as an [`Evaluator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BetterEvaluator;

impl Evaluator<PacmanState> for BetterEvaluator {
    #[inline]
    fn evaluate(&self, state: &PacmanState) -> f64 {
        better_evaluation(state)
    }
}
