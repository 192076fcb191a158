use crate::pacman::{Direction, PacmanState};
use crate::search::{GameState, IllegalActionError};

/// Returned for a move that wins or eats food.
pub const IMPROVEMENT_SCORE: f64 = 1000.0;
/// Returned for a move that ends next to, or on, a dangerous ghost.
pub const CAUGHT_SCORE: f64 = -1000.0;
const NO_FOOD_DISTANCE: usize = 1000;

/// Scores Pacman playing `action` from `current`, looking only at the state
/// right after Pacman's move.
///
/// In order: a win is [`IMPROVEMENT_SCORE`]; a dangerous ghost on the cell
/// Pacman just left, or within one step of where it arrives, is
/// [`CAUGHT_SCORE`]; eating food is [`IMPROVEMENT_SCORE`]; anything else is the
/// reciprocal of the distance to the nearest remaining food.
pub fn reflex_evaluation(
    current: &PacmanState,
    action: Direction,
) -> Result<f64, IllegalActionError> {
    let successor = current.pacman_successor(action)?;
    let from = current.pacman_position();
    let to = successor.pacman_position();

    if successor.is_win() {
        return Ok(IMPROVEMENT_SCORE);
    }

    let caught = successor
        .ghost_states()
        .iter()
        .filter(|ghost| !ghost.is_scared())
        .any(|ghost| ghost.position() == from || to.manhattan_distance(ghost.position()) <= 1);
    if caught {
        return Ok(CAUGHT_SCORE);
    }

    if successor.num_food() < current.num_food() {
        return Ok(IMPROVEMENT_SCORE);
    }

    let nearest = successor
        .food()
        .as_list()
        .into_iter()
        .map(|food| to.manhattan_distance(food))
        .fold(NO_FOOD_DISTANCE, usize::min);

    Ok(1.0 / nearest as f64)
}
