//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::process;

use multiagent::game::GameError;
use multiagent::pacman::{Layout, PacmanState};

/// Loads a layout by name or path, keeping at most `ghosts` ghosts.
pub(crate) fn load_state(layout: &str, ghosts: Option<usize>) -> Result<PacmanState, GameError> {
    let mut layout = Layout::load(layout)?;
    if let Some(ghosts) = ghosts {
        layout = layout.with_max_ghosts(ghosts);
    }
    Ok(PacmanState::new(&layout))
}

/// Prints `error` and exits with a failure status.
pub(crate) fn exit_with_error(context: &str, error: impl Display) -> ! {
    eprintln!("{}: {}", context, error);
    process::exit(1);
}
