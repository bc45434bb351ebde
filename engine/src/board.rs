use crate::types::{Cell, Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// The 3x3 grid. Nine cells of `Option<Mark>`, so the whole board is
/// `Copy`; the search branches on cheap copies instead of mutating and
/// undoing a shared grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from the 0/1/2 cell encoding (0 empty, 1 X, 2 O).
    #[cfg(test)]
    pub fn from_values(values: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, row_values) in values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                board.cells[row][col] = match value {
                    0 => None,
                    1 => Some(Mark::X),
                    2 => Some(Mark::O),
                    other => panic!("invalid cell value {}", other),
                };
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = Some(mark);
    }

    /// Copy of this board with one extra mark placed.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.set(pos, mark);
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Empty cells in row-major order (row 0 first, left to right).
    /// The search relies on this order for its tie-break.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }
}
