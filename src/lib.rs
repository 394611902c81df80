//! Flappy - Terminal Flappy Bird
//!
//! This library exposes the simulation core for testing and for the binary.

pub mod audio;
pub mod constants;
pub mod game;
pub mod highscore;
pub mod ui;
