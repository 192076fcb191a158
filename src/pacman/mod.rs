//! A small grid pursuit game implementing [`GameState`](crate::search::GameState).
//!
//! This is the oracle the agents play against. The search itself knows
//! nothing about grids, food or ghosts.

mod direction;
mod display;
pub mod error;
mod grid;
mod layout;
pub mod layouts;
mod state;

#[cfg(test)]
mod tests;

pub use direction::{Direction, Position, ALL_DIRECTIONS};
pub use error::LayoutError;
pub use grid::Grid;
pub use layout::Layout;
pub use state::{
    AgentState, DirectionList, Outcome, PacmanState, FOOD_SCORE, GHOST_EATEN_SCORE, LOSE_PENALTY,
    SCARED_TIME, TIME_PENALTY, WIN_SCORE,
};
