//! Plain-text board rendering with a one-letter-per-column legend.

use crate::game::{Board, Cell};

/// Letter designator for a column (`A` is column 0).
pub fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Column legend: one letter per column, space separated.
pub fn header(cols: usize) -> String {
    let mut out = String::new();
    for col in 0..cols {
        if col > 0 {
            out.push(' ');
        }
        out.push(column_letter(col));
    }
    out
}

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Taken(player) => (b'0' + player.number()) as char,
    }
}

/// Render the whole board, top row first, legend underneath.
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    for row in board.iter_rows() {
        for (col, &cell) in row.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(symbol(cell));
        }
        out.push('\n');
    }
    out.push_str(&header(board.cols()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player};

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), 'A');
        assert_eq!(column_letter(6), 'G');
        assert_eq!(column_letter(25), 'Z');
    }

    #[test]
    fn test_header() {
        assert_eq!(header(3), "A B C");
        assert_eq!(header(7), "A B C D E F G");
    }

    #[test]
    fn test_board_text() {
        let mut board = Board::new(2, 3, 2).unwrap();
        board.drop_token(0, Player::One).unwrap();
        board.drop_token(0, Player::Two).unwrap();
        board.drop_token(2, Player::One).unwrap();

        assert_eq!(board_text(&board), "2 . .\n1 . 1\nA B C");
    }
}
