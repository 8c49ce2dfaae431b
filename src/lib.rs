//! Deterministic simulation core for a grid snake game, plus the terminal
//! collaborators (input mapping, scheduling, rendering) that drive it.

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod random;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
