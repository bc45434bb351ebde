use crate::board::Board;
use crate::evaluator::evaluate;
use crate::types::{Mark, Outcome, Position};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Returns the optimal move for `player`: a win if one can be forced,
/// otherwise a draw, never a loss, assuming optimal replies. Among
/// equally scored moves the first empty cell in row-major order is
/// chosen, so the result is reproducible for a given board.
///
/// Returns `None` when the board is already decided or full; calling
/// with such a board is a caller error and there is no move to give.
/// The caller's board is never modified.
pub fn best_move(board: &Board, player: Mark) -> Option<Position> {
    if evaluate(board).is_over() {
        return None;
    }

    let mut best = None;
    let mut best_score = i32::MIN;

    for pos in board.empty_cells() {
        let score = minimax(&board.with_mark(pos, player), player.opponent(), player);
        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best
}

/// Full-depth game-tree score of `board` with `to_move` to act, always
/// from the point of view of the top-level `player`: +1 a forced win
/// for `player`, -1 a forced win for the opponent, 0 a forced draw.
fn minimax(board: &Board, to_move: Mark, player: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Win(mark) => {
            if mark == player {
                WIN_SCORE
            } else {
                LOSS_SCORE
            }
        }
        Outcome::Draw => DRAW_SCORE,
        // Ongoing implies at least one empty cell, so the fold below
        // always sees a move and the i32::MIN/MAX seeds never leak out.
        Outcome::Ongoing => {
            if to_move == player {
                let mut best = i32::MIN;
                for pos in board.empty_cells() {
                    let next = board.with_mark(pos, to_move);
                    best = best.max(minimax(&next, to_move.opponent(), player));
                }
                best
            } else {
                let mut worst = i32::MAX;
                for pos in board.empty_cells() {
                    let next = board.with_mark(pos, to_move);
                    worst = worst.min(minimax(&next, to_move.opponent(), player));
                }
                worst
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_winning_move() {
        let board = Board::from_values([[1, 1, 0], [2, 2, 0], [0, 0, 0]]);
        let pos = best_move(&board, Mark::X).unwrap();
        assert_eq!(pos, Position::new(0, 2));
        assert_eq!(
            evaluate(&board.with_mark(pos, Mark::X)),
            Outcome::Win(Mark::X)
        );
    }

    #[test]
    fn test_prefers_own_win_over_blocking() {
        // X could block O at (0, 2) but wins outright at (1, 2).
        let board = Board::from_values([[2, 2, 0], [1, 1, 0], [0, 0, 0]]);
        let pos = best_move(&board, Mark::X).unwrap();
        assert_eq!(pos, Position::new(1, 2));
        assert_eq!(
            evaluate(&board.with_mark(pos, Mark::X)),
            Outcome::Win(Mark::X)
        );
    }

    #[test]
    fn test_blocks_opponent_threat_when_no_own_win() {
        // O threatens row 1 at (1, 0); X has no immediate win and can
        // still hold a draw by blocking. (1, 0) is not the first empty
        // cell, so this exercises the scoring, not the tie-break.
        let board = Board::from_values([[1, 0, 0], [0, 2, 2], [0, 0, 1]]);
        assert_eq!(best_move(&board, Mark::X), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let board = Board::from_values([[1, 2, 0], [0, 1, 0], [0, 0, 2]]);
        let pos = best_move(&board, Mark::O).unwrap();
        assert_eq!(board.get(pos), None);
    }

    #[test]
    fn test_input_board_unchanged() {
        let board = Board::from_values([[1, 0, 0], [0, 2, 0], [0, 0, 0]]);
        let snapshot = board;
        best_move(&board, Mark::X);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_empty_board_opening_is_first_cell() {
        // Every opening is a game-theoretic draw, so the row-major
        // tie-break settles on (0, 0).
        assert_eq!(best_move(&Board::new(), Mark::X), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = Board::from_values([[1, 2, 1], [2, 1, 1], [2, 1, 2]]);
        assert_eq!(best_move(&board, Mark::X), None);
    }

    #[test]
    fn test_decided_board_returns_none() {
        let board = Board::from_values([[1, 1, 1], [2, 2, 0], [0, 0, 0]]);
        assert_eq!(best_move(&board, Mark::O), None);
    }

    #[test]
    fn test_perfect_play_against_itself_draws() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        while evaluate(&board) == Outcome::Ongoing {
            let pos = best_move(&board, mark).unwrap();
            board = board.with_mark(pos, mark);
            mark = mark.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
