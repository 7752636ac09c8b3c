mod board;
mod bot_controller;
mod error;
mod parallel;
mod search;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, MIN_BOARD_SIZE};
pub use bot_controller::{BotDecision, BotType, calculate_move};
pub use error::{GameError, InvalidMoveReason};
pub use parallel::{best_move_parallel, search_parallel};
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchEngine, SearchOutcome, WIN_SCORE, best_move, evaluate};
pub use session_rng::SessionRng;
pub use types::{Cell, FirstPlayerMode, GameState, Mark, Move, Outcome};
