//! Core game logic: board representation, player types, and the turn-taking
//! engine with win detection.

mod board;
mod engine;
mod player;

pub use board::{Board, BoardError, Cell};
pub use engine::{GameEngine, MoveError, MoveOutcome, Status};
pub use player::Player;
