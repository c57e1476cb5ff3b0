use log::debug;

use super::board::{Board, BoardError};
use super::player::Player;

/// Game status. `Won`, `Drawn` and `Quit` are terminal: once reached, the
/// engine rejects all further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Player),
    Drawn,
    Quit,
}

/// Per-move rejections. All of these leave the engine untouched; the caller
/// is expected to re-prompt the same player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("'{0}' is not a valid column")]
    InvalidColumn(String),

    #[error("column is full")]
    ColumnFull,

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// What an accepted move produced. Variants carry a post-move snapshot of the
/// board and the relevant player, so the caller can render without reaching
/// into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { board: Board, next_player: Player },
    Win { board: Board, winner: Player },
    Draw { board: Board },
    Quit,
}

/// Turn-taking state machine over a [`Board`]. Owns the board exclusively;
/// `submit_move` is the only state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: Status,
}

impl GameEngine {
    /// Create a fresh game with player one to move.
    ///
    /// Propagates `InvalidDimensions` from board construction.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        Ok(GameEngine {
            board: Board::new(rows, cols, win_length)?,
            current_player: Player::One,
            status: Status::InProgress,
        })
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Apply one turn of raw input for the current player.
    ///
    /// Input is a single case-insensitive column letter (`A` is column 0), or
    /// the quit token `q`. Rejected input (`InvalidColumn`, `ColumnFull`)
    /// leaves the turn with the same player; accepted input either continues
    /// the game with the other player or reaches a terminal state.
    pub fn submit_move(&mut self, raw: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let input = raw.trim();
        if input.eq_ignore_ascii_case("q") {
            debug!("{} quit the game", self.current_player);
            self.status = Status::Quit;
            return Ok(MoveOutcome::Quit);
        }

        let col = parse_column(input).ok_or_else(|| MoveError::InvalidColumn(input.into()))?;
        if col >= self.board.cols() {
            return Err(MoveError::InvalidColumn(input.into()));
        }

        let mover = self.current_player;
        let row = match self.board.drop_token(col, mover) {
            Ok(row) => row,
            Err(BoardError::ColumnFull) => return Err(MoveError::ColumnFull),
            // The column index was validated above
            Err(err) => unreachable!("drop on validated column failed: {err}"),
        };
        debug!("{mover} placed a token at ({row}, {col})");

        if self.board.check_win(row, col) {
            self.status = Status::Won(mover);
            Ok(MoveOutcome::Win {
                board: self.board.clone(),
                winner: mover,
            })
        } else if self.board.is_full() {
            self.status = Status::Drawn;
            Ok(MoveOutcome::Draw {
                board: self.board.clone(),
            })
        } else {
            self.current_player = mover.other();
            Ok(MoveOutcome::Continue {
                board: self.board.clone(),
                next_player: self.current_player,
            })
        }
    }
}

/// Map a single letter to a column index (`A`/`a` is 0). Anything that is not
/// exactly one ASCII letter is rejected.
fn parse_column(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let ch = chars.next()?;
    if chars.next().is_some() || !ch.is_ascii_alphabetic() {
        return None;
    }
    Some(ch.to_ascii_uppercase() as usize - 'A' as usize)
}
