use std::fmt;

use crate::search::GameState;

use super::direction::{Direction, Position};
use super::state::{Outcome, PacmanState};

const WALL: char = '%';
const FOOD: char = '.';
const CAPSULE: char = 'o';
const GHOST: char = 'G';
const SCARED_GHOST: char = 'S';

fn pacman_char(direction: Direction) -> char {
    match direction {
        Direction::North => 'v',
        Direction::South => '^',
        Direction::East => '<',
        Direction::West => '>',
        Direction::Stop => 'P',
    }
}

impl PacmanState {
    fn cell_char(&self, position: Position) -> char {
        let pacman = self.pacman_state();
        if pacman.position() == position {
            return pacman_char(pacman.direction());
        }
        if let Some(ghost) = self
            .ghost_states()
            .iter()
            .find(|ghost| ghost.position() == position)
        {
            return if ghost.is_scared() { SCARED_GHOST } else { GHOST };
        }
        if self.has_wall(position) {
            WALL
        } else if self.has_food(position) {
            FOOD
        } else if self.capsules().contains(&position) {
            CAPSULE
        } else {
            ' '
        }
    }
}

impl fmt::Display for PacmanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let walls = self.walls();
        for y in 0..walls.height() {
            let row: String = (0..walls.width())
                .map(|x| self.cell_char(Position::new(x, y)))
                .collect();
            writeln!(f, "{}", row)?;
        }

        write!(f, "Score: {}", self.score())?;
        match self.outcome() {
            Some(Outcome::Win) => write!(f, " (won)"),
            Some(Outcome::Lose) => write!(f, " (lost)"),
            None => Ok(()),
        }
    }
}
