mod board;
mod error;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use error::GameError;
pub use minimax::{
    BestMove, DRAW_SCORE, SearchMode, SearchStats, Searcher, WIN_SCORE, best_move,
    terminal_score,
};
pub use session::GameSession;
pub use types::{BOARD_SIZE, Cell, GameStatus, Player, Position, Role, Tally, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
