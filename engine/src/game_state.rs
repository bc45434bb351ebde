use crate::board::{BOARD_SIZE, Board};
use crate::evaluator::{evaluate, winning_line};
use crate::types::{Mark, Outcome, Position, WinningLine};

/// One local game session. The shell owns this, feeds it moves and
/// reads the board back for rendering. X always moves first.
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            outcome: Outcome::Ongoing,
            last_move: None,
        }
    }

    /// Places the current player's mark and re-evaluates the board.
    /// The turn only passes while the game is still ongoing.
    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.outcome.is_over() {
            return Err("Game is already over".to_string());
        }

        if pos.row >= BOARD_SIZE || pos.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(pos).is_some() {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(pos, self.current_mark);
        self.last_move = Some(pos);
        self.outcome = evaluate(&self.board);

        if self.outcome == Outcome::Ongoing {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut game = GameState::new();
        assert_eq!(game.current_mark, Mark::X);
        game.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(game.current_mark, Mark::O);
        game.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(game.current_mark, Mark::X);
        assert_eq!(game.last_move, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = GameState::new();
        game.place_mark(Position::new(0, 0)).unwrap();
        let result = game.place_mark(Position::new(0, 0));
        assert_eq!(result, Err("Cell is already marked".to_string()));
        assert_eq!(game.current_mark, Mark::O);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut game = GameState::new();
        assert!(game.place_mark(Position::new(3, 0)).is_err());
        assert!(game.place_mark(Position::new(0, 3)).is_err());
    }

    #[test]
    fn test_win_ends_game_and_keeps_turn() {
        let mut game = GameState::new();
        for pos in [
            Position::new(0, 0), // X
            Position::new(1, 0), // O
            Position::new(0, 1), // X
            Position::new(1, 1), // O
            Position::new(0, 2), // X completes row 0
        ] {
            game.place_mark(pos).unwrap();
        }
        assert_eq!(game.outcome, Outcome::Win(Mark::X));
        assert_eq!(game.current_mark, Mark::X);
        assert!(game.winning_line().is_some());
        assert_eq!(
            game.place_mark(Position::new(2, 2)),
            Err("Game is already over".to_string())
        );
    }

    #[test]
    fn test_restart_clears_session() {
        let mut game = GameState::new();
        game.place_mark(Position::new(2, 2)).unwrap();
        game.restart();
        assert_eq!(game.current_mark, Mark::X);
        assert_eq!(game.outcome, Outcome::Ongoing);
        assert_eq!(game.last_move, None);
        assert_eq!(game.board, Board::new());
    }
}
