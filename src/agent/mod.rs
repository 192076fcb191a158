//! Agents that pick one action per turn.
//!
//! Pacman is agent 0 and is played by a [`SearchAgent`] or a [`ReflexAgent`];
//! ghosts are played by [`RandomGhost`].

mod ghost;
mod reflex_agent;
mod search_agent;


pub use ghost::RandomGhost;
pub use reflex_agent::ReflexAgent;
pub use search_agent::SearchAgent;

use crate::search::{GameState, SearchError};

pub trait Agent<S: GameState> {
    /// The agent index this agent moves for.
    fn index(&self) -> usize;

    fn get_action(&mut self, state: &S) -> Result<S::Action, SearchError>;
}
