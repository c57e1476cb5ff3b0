use std::io::{self, BufRead, Write};

use log::debug;

use crate::game::{GameEngine, MoveError, MoveOutcome};

use super::render;

/// Line-oriented I/O shell around a [`GameEngine`].
///
/// Owns the input and output streams for the duration of the session and
/// holds no game state of its own: each round it prompts the player the
/// engine names, passes the raw line to the engine, and renders whatever
/// comes back. Process lifecycle stays with the caller.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    /// Drive the game to a terminal state. Returns once the game is won,
    /// drawn, quit, or the input stream ends.
    pub fn run(&mut self, engine: &mut GameEngine) -> io::Result<()> {
        writeln!(self.output, "{}", render::board_text(engine.board()))?;

        while !engine.is_terminal() {
            write!(self.output, "{}, which column? ", engine.current_player())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF counts as a quit request
                writeln!(self.output, "Goodbye.")?;
                return Ok(());
            }

            match engine.submit_move(&line) {
                Ok(MoveOutcome::Continue { board, .. }) => {
                    writeln!(self.output, "{}", render::board_text(&board))?;
                }
                Ok(MoveOutcome::Win { board, winner }) => {
                    writeln!(self.output, "{}", render::board_text(&board))?;
                    writeln!(self.output, "Congratulations, {winner}. You win.")?;
                }
                Ok(MoveOutcome::Draw { board }) => {
                    writeln!(self.output, "{}", render::board_text(&board))?;
                    writeln!(self.output, "The board is full. It's a draw.")?;
                }
                Ok(MoveOutcome::Quit) => {
                    writeln!(self.output, "Goodbye.")?;
                }
                Err(MoveError::InvalidColumn(input)) => {
                    debug!("rejected input {input:?}");
                    writeln!(self.output, "Invalid input, please try again.")?;
                }
                Err(MoveError::ColumnFull) => {
                    writeln!(self.output, "This column is full, please select another.")?;
                }
                Err(MoveError::GameAlreadyOver) => {
                    writeln!(self.output, "The game is already over.")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Status};
    use std::io::Cursor;

    fn run_session(engine: &mut GameEngine, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(Cursor::new(input.as_bytes()), &mut output)
            .run(engine)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_session() {
        let mut engine = GameEngine::new(6, 7, 4).unwrap();
        let output = run_session(&mut engine, "q\n");
        assert!(output.contains("Player 1, which column? "));
        assert!(output.contains("Goodbye."));
        assert_eq!(engine.status(), Status::Quit);
    }

    #[test]
    fn test_eof_ends_session() {
        let mut engine = GameEngine::new(6, 7, 4).unwrap();
        let output = run_session(&mut engine, "");
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_win_session() {
        let mut engine = GameEngine::new(6, 7, 4).unwrap();
        let output = run_session(&mut engine, "a\na\nb\nb\nc\nc\nd\n");
        assert!(output.contains("Congratulations, Player 1. You win."));
        assert_eq!(engine.status(), Status::Won(Player::One));
    }

    #[test]
    fn test_invalid_input_reprompts_same_player() {
        let mut engine = GameEngine::new(6, 7, 4).unwrap();
        let output = run_session(&mut engine, "3\nq\n");
        assert!(output.contains("Invalid input, please try again."));
        // Player 1 is prompted again after the rejection
        assert_eq!(output.matches("Player 1, which column?").count(), 2);
        assert_eq!(output.matches("Player 2, which column?").count(), 0);
    }

    #[test]
    fn test_full_column_then_draw() {
        let mut engine = GameEngine::new(1, 2, 2).unwrap();
        let output = run_session(&mut engine, "a\na\nb\n");
        assert!(output.contains("This column is full, please select another."));
        assert!(output.contains("The board is full. It's a draw."));
        assert_eq!(engine.status(), Status::Drawn);
    }

    #[test]
    fn test_board_rendered_with_legend() {
        let mut engine = GameEngine::new(6, 7, 4).unwrap();
        let output = run_session(&mut engine, "d\nq\n");
        assert!(output.contains("A B C D E F G"));
        assert!(output.contains(". . . 1 . . ."));
    }
}
