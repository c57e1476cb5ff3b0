use super::player::Player;

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Player),
}

/// Errors raised by the board itself. `InvalidDimensions` is fatal at
/// construction time; `ColumnOutOfRange` and `OutOfBounds` indicate a caller
/// bypassed the engine's validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid dimensions: {rows} rows x {cols} cols with win length {win_length}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        win_length: usize,
    },

    #[error("column {col} is outside 0..{cols}")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column is full")]
    ColumnFull,

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// The grid of cells. Row 0 is the top, row `rows - 1` is the bottom, where
/// dropped tokens land first. Dimensions and win-length are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

/// The four undirected line orientations: horizontal, vertical, and the two
/// diagonals. Each is walked in both directions from a placed cell.
const ORIENTATIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Create a new empty board.
    ///
    /// Fails if any dimension is zero, or if `win_length` exceeds both `rows`
    /// and `cols` (no line of that length could ever fit).
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || win_length == 0 || win_length > rows.max(cols) {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                win_length,
            });
        }

        Ok(Board {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Iterate over the rows of the grid, top row first.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Check if a column is full, i.e. its topmost cell is occupied.
    pub fn is_column_full(&self, col: usize) -> Result<bool, BoardError> {
        if col >= self.cols {
            return Err(BoardError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index(0, col)] != Cell::Empty)
    }

    /// Drop a token in a column and return the row where it landed.
    ///
    /// Scans from the bottom row upward for the first empty cell, so gravity
    /// holds by construction. This is the only mutation entry point.
    pub fn drop_token(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if self.is_column_full(col)? {
            return Err(BoardError::ColumnFull);
        }

        for row in (0..self.rows).rev() {
            let idx = self.index(row, col);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = player.to_cell();
                return Ok(row);
            }
        }

        unreachable!("column has an empty cell if is_column_full returned false");
    }

    /// Check if the board is completely full. Gravity makes the top row
    /// sufficient to inspect.
    pub fn is_full(&self) -> bool {
        self.cells[..self.cols].iter().all(|&c| c != Cell::Empty)
    }

    /// Check if the token last placed at (row, col) completed a winning line.
    ///
    /// Point-centered scan: for each orientation, count consecutive matching
    /// tokens extending from the placed cell in both opposite directions.
    /// A new line of length `win_length` can only pass through the placed
    /// cell, so nothing else needs to be examined.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = match self.get(row, col) {
            Ok(cell @ Cell::Taken(_)) => cell,
            _ => return false,
        };

        ORIENTATIONS.iter().any(|&(dr, dc)| {
            1 + self.ray(row, col, dr, dc, cell) + self.ray(row, col, -dr, -dc, cell)
                >= self.win_length
        })
    }

    /// Count consecutive cells equal to `cell` along (dr, dc), starting one
    /// step away from (row, col). Stops at the grid edge.
    fn ray(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.cols
            && self.cells[self.index(r as usize, c as usize)] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}
