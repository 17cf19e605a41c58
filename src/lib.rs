//! # Connect Four
//!
//! Rules engine for the two-player gravity-drop connection game, with a
//! plain-text console driver.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: grid, players, move resolution, win detection, turn state machine
//! - [`ui`] — Column source and presenter traits, the match loop, console implementations
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
