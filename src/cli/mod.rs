//! Terminal I/O shell: prompting, input dispatch, and plain-text rendering.
//! Holds no game state; the engine signals termination through returned
//! results, never by touching the process.

mod render;
mod shell;

pub use render::{board_text, column_letter, header};
pub use shell::Shell;
