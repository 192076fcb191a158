//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod best_action;
pub mod count_nodes;
pub mod layouts;
pub mod play;

// Shared utilities for commands
pub(crate) mod util;
