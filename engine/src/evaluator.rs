use crate::board::{BOARD_SIZE, Board};
use crate::types::{Mark, Outcome, Position, WinningLine};

/// Evaluates a board snapshot: a completed line wins, a full board with
/// no line is a draw, anything else is still ongoing. Pure function of
/// the board contents, any grid is accepted.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        return Outcome::Win(line.mark);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// First completed line in a fixed scan order: rows, then columns, then
/// the main diagonal, then the anti-diagonal. On boards where several
/// lines are complete (unreachable under alternating play) the scan
/// order is the tie-break.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    check_rows(board)
        .or_else(|| check_columns(board))
        .or_else(|| check_main_diagonal(board))
        .or_else(|| check_anti_diagonal(board))
}

fn check_rows(board: &Board) -> Option<WinningLine> {
    for row in 0..BOARD_SIZE {
        if let Some(mark) = board.get(Position::new(row, 0))
            && (1..BOARD_SIZE).all(|col| board.get(Position::new(row, col)) == Some(mark))
        {
            return Some(WinningLine::new(
                mark,
                Position::new(row, 0),
                Position::new(row, BOARD_SIZE - 1),
            ));
        }
    }
    None
}

fn check_columns(board: &Board) -> Option<WinningLine> {
    for col in 0..BOARD_SIZE {
        if let Some(mark) = board.get(Position::new(0, col))
            && (1..BOARD_SIZE).all(|row| board.get(Position::new(row, col)) == Some(mark))
        {
            return Some(WinningLine::new(
                mark,
                Position::new(0, col),
                Position::new(BOARD_SIZE - 1, col),
            ));
        }
    }
    None
}

fn check_main_diagonal(board: &Board) -> Option<WinningLine> {
    let mark = board.get(Position::new(0, 0))?;
    if (1..BOARD_SIZE).all(|i| board.get(Position::new(i, i)) == Some(mark)) {
        return Some(WinningLine::new(
            mark,
            Position::new(0, 0),
            Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
        ));
    }
    None
}

fn check_anti_diagonal(board: &Board) -> Option<WinningLine> {
    let mark = board.get(Position::new(0, BOARD_SIZE - 1))?;
    if (1..BOARD_SIZE).all(|i| board.get(Position::new(i, BOARD_SIZE - 1 - i)) == Some(mark)) {
        return Some(WinningLine::new(
            mark,
            Position::new(0, BOARD_SIZE - 1),
            Position::new(BOARD_SIZE - 1, 0),
        ));
    }
    None
}
