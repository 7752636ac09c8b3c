use super::board::Board;
use super::error::GameError;
use super::types::{GameState, Mark, Move, Outcome};

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

/// Score of a finished game from the maximizer's point of view.
pub fn evaluate(outcome: Outcome, maximizer_mark: Mark) -> i32 {
    match outcome {
        Outcome::Draw => DRAW_SCORE,
        Outcome::Won(mark) if mark == maximizer_mark => WIN_SCORE,
        Outcome::Won(_) => LOSS_SCORE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: i32,
    pub nodes: u64,
    pub max_depth: usize,
}

/// Full-depth minimax without pruning.
///
/// The engine borrows the caller's board for the duration of a call and
/// explores it in place with apply/undo, so the board must not be touched by
/// anyone else meanwhile. It is handed back exactly as it was received.
#[derive(Debug, Default)]
pub struct SearchEngine {
    nodes: u64,
    max_depth: usize,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited and deepest ply reached since the last `search`.
    pub fn stats(&self) -> (u64, usize) {
        (self.nodes, self.max_depth)
    }

    pub fn best_move(&mut self, board: &mut Board, searching_mark: Mark) -> Result<Move, GameError> {
        self.search(board, searching_mark).map(|outcome| outcome.best_move)
    }

    pub fn search(&mut self, board: &mut Board, searching_mark: Mark) -> Result<SearchOutcome, GameError> {
        let state = board.state();
        if state != GameState::Playing {
            return Err(GameError::NoSearchPossible(state));
        }

        self.nodes = 0;
        self.max_depth = 0;

        let (score, best_move) = self.value_and_move(board, true, searching_mark, 0);
        let best_move = best_move.ok_or(GameError::NoSearchPossible(state))?;

        Ok(SearchOutcome {
            best_move,
            score,
            nodes: self.nodes,
            max_depth: self.max_depth,
        })
    }

    /// Value of `board` for `maximizer_mark` and the move reaching it.
    ///
    /// Ties keep the first move in `legal_moves` order.
    pub fn value_and_move(
        &mut self,
        board: &mut Board,
        maximizing_turn: bool,
        maximizer_mark: Mark,
        depth: usize,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        if let Some(outcome) = board.state().outcome() {
            return (evaluate(outcome, maximizer_mark), None);
        }

        let mark_to_move = if maximizing_turn {
            maximizer_mark
        } else {
            maximizer_mark.opponent()
        };

        let mut best_score = if maximizing_turn { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in board.legal_moves() {
            board.place(mv, mark_to_move);
            let (score, _) = self.value_and_move(board, !maximizing_turn, maximizer_mark, depth + 1);
            board.undo();

            let improves = if maximizing_turn {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }
}

/// Convenience wrapper around a throwaway [`SearchEngine`].
pub fn best_move(board: &mut Board, searching_mark: Mark) -> Result<Move, GameError> {
    SearchEngine::new().best_move(board, searching_mark)
}
