pub mod agent;
pub mod config;
pub mod evaluate;
pub mod game;
pub mod pacman;
pub mod search;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
