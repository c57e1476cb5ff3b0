//! # Four in a Row
//!
//! A text-driven, two-player connection game generalized over board size and
//! win-length. The classic game is the default: six rows, seven columns,
//! four in a row.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn-taking engine
//! - [`cli`] — Terminal I/O shell: prompting and plain-text rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
