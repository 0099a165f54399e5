//! Skyward - Terminal Flappy Bird
//!
//! This module exposes the game simulation for testing; the binary drives it
//! through the scheduler loop in `main.rs`.

pub mod audio;
pub mod constants;
pub mod game;
pub mod ui;
