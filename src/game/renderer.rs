use std::time::Duration;

use crate::pacman::PacmanState;

pub trait GameRenderer {
    /// Called once before the first move and again after every full round.
    fn render(&self, state: &PacmanState, pacman_moves: usize);
    fn frame_delay(&self) -> Option<Duration>;
}

/// Draws nothing. Used for batches of games and in tests.
pub struct SilentRenderer;

impl GameRenderer for SilentRenderer {
    fn render(&self, _state: &PacmanState, _pacman_moves: usize) {}

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Prints the board as text after every round.
pub struct TextRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for TextRenderer {
    fn render(&self, state: &PacmanState, pacman_moves: usize) {
        println!("{}", state);
        println!("* Moves: {}\n", pacman_moves);
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}
