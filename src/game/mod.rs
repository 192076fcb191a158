//! Playing full games: Pacman and the ghosts take turns until someone wins or
//! the move limit runs out.

mod engine;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod node_counter;
mod record;
pub mod renderer;


use thiserror::Error;

use crate::config::ConfigError;
use crate::pacman::LayoutError;
use crate::search::{IllegalActionError, SearchError};

pub use engine::{Game, GameConfig};
pub use r#loop::{build_pacman, GameLoop};
pub use node_counter::{count_nodes, NodeCount};
pub use record::{GameOutcome, GameRecord, GameSummary};
pub use renderer::{GameRenderer, SilentRenderer, TextRenderer};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("agent {agent} could not choose a move: {source}")]
    Agent {
        agent: usize,
        #[source]
        source: SearchError,
    },
    #[error("agent {agent} chose an illegal move: {source}")]
    IllegalMove {
        agent: usize,
        #[source]
        source: IllegalActionError,
    },
    #[error("the layout has {expected} agents but {found} were seated")]
    AgentCount { expected: usize, found: usize },
    #[error("seat {seat} is taken by an agent playing for agent {index}")]
    AgentSeat { seat: usize, index: usize },
}
