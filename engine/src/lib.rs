pub mod board;
pub mod config;
pub mod evaluator;
pub mod game_state;
pub mod logger;
pub mod search;
pub mod types;

pub use board::{BOARD_SIZE, Board};
pub use evaluator::{evaluate, winning_line};
pub use game_state::GameState;
pub use search::best_move;
pub use types::{Cell, Mark, Outcome, Position, WinningLine};
