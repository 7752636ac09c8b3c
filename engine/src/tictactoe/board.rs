use super::error::{GameError, InvalidMoveReason};
use super::types::{Cell, GameState, Mark, Move};
use super::win_detector::completes_line;

pub const MIN_BOARD_SIZE: usize = 3;

/// An n×n tic-tac-toe board with the move history needed for undo.
///
/// `winner` caches the result of the last win check. Only the most recent
/// move can complete a line, so `undo` simply clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Cell>>,
    history: Vec<Move>,
    winner: Option<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize(size));
        }

        Ok(Self {
            size,
            grid: vec![vec![Cell::Empty; size]; size],
            history: Vec::with_capacity(size * size),
            winner: None,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.grid.get(mv.row).and_then(|row| row.get(mv.col)).copied()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn empty_cells(&self) -> usize {
        self.size * self.size - self.history.len()
    }

    /// Empty cells in row-major order. Search relies on this order for
    /// tie-breaking.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.empty_cells());
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    pub fn apply(&mut self, mv: Move, mark: Mark) -> Result<(), GameError> {
        self.validate_move(mv)?;
        self.place(mv, mark);
        Ok(())
    }

    /// Places a mark without validation. Callers draw `mv` from
    /// `legal_moves`.
    pub(crate) fn place(&mut self, mv: Move, mark: Mark) {
        self.grid[mv.row][mv.col] = Cell::Marked(mark);
        self.history.push(mv);

        // A line completed earlier stays complete.
        if self.winner.is_none() && completes_line(&self.grid, mv, mark) {
            self.winner = Some(mark);
        }
    }

    pub fn undo(&mut self) {
        let Some(last) = self.history.pop() else {
            return;
        };
        self.grid[last.row][last.col] = Cell::Empty;
        self.winner = None;
    }

    pub fn state(&self) -> GameState {
        if let Some(mark) = self.winner {
            return GameState::Won(mark);
        }
        if self.empty_cells() == 0 {
            return GameState::Draw;
        }
        GameState::Playing
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        self.winner
    }

    fn validate_move(&self, mv: Move) -> Result<(), GameError> {
        match self.cell(mv) {
            None => Err(GameError::InvalidMove {
                mv,
                reason: InvalidMoveReason::OutOfBounds,
            }),
            Some(Cell::Marked(_)) => Err(GameError::InvalidMove {
                mv,
                reason: InvalidMoveReason::Occupied,
            }),
            Some(Cell::Empty) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[(usize, usize, Mark)]) {
        for &(row, col, mark) in moves {
            board.apply(Move::new(row, col), mark).unwrap();
        }
    }

    #[test]
    fn test_new_rejects_small_sizes() {
        assert_eq!(Board::new(2), Err(GameError::InvalidSize(2)));
        assert_eq!(Board::new(0), Err(GameError::InvalidSize(0)));
        let board = Board::new(3).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.state(), GameState::Playing);
        assert_eq!(board.legal_moves().len(), 9);
    }

    #[test]
    fn test_legal_moves_are_row_major() {
        let mut board = Board::new(3).unwrap();
        play(&mut board, &[(0, 1, Mark::X), (1, 0, Mark::O)]);

        let moves = board.legal_moves();
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(1, 1),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
        assert_eq!(moves.len() + board.history().len(), 9);
    }

    #[test]
    fn test_apply_rejects_out_of_bounds_and_occupied() {
        let mut board = Board::new(3).unwrap();
        board.apply(Move::new(1, 1), Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.apply(Move::new(3, 0), Mark::O),
            Err(GameError::InvalidMove {
                mv: Move::new(3, 0),
                reason: InvalidMoveReason::OutOfBounds,
            })
        );
        assert_eq!(
            board.apply(Move::new(1, 1), Mark::O),
            Err(GameError::InvalidMove {
                mv: Move::new(1, 1),
                reason: InvalidMoveReason::Occupied,
            })
        );
        assert_eq!(board, before);
        assert!(!board.is_valid_move(Move::new(0, 3)));
        assert!(board.is_valid_move(Move::new(0, 0)));
    }

    #[test]
    fn test_apply_then_undo_restores_board() {
        let mut board = Board::new(4).unwrap();
        play(&mut board, &[(0, 0, Mark::X), (3, 3, Mark::O), (1, 2, Mark::X)]);
        let before = board.clone();

        play(&mut board, &[(2, 2, Mark::O), (0, 1, Mark::X), (0, 2, Mark::O)]);
        board.undo();
        board.undo();
        board.undo();

        assert_eq!(board, before);
        assert_eq!(board.last_move(), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut board = Board::new(3).unwrap();
        board.undo();
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_row_win_sets_winner_and_undo_clears_it() {
        let mut board = Board::new(3).unwrap();
        play(
            &mut board,
            &[(0, 0, Mark::X), (1, 0, Mark::O), (0, 1, Mark::X), (1, 1, Mark::O)],
        );
        assert_eq!(board.winner_mark(), None);

        board.apply(Move::new(0, 2), Mark::X).unwrap();
        assert_eq!(board.winner_mark(), Some(Mark::X));
        assert_eq!(board.state(), GameState::Won(Mark::X));

        board.undo();
        assert_eq!(board.winner_mark(), None);
        assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let mut board = Board::new(3).unwrap();
        play(
            &mut board,
            &[(0, 2, Mark::O), (0, 0, Mark::X), (1, 2, Mark::O), (1, 1, Mark::X), (2, 2, Mark::O)],
        );
        assert_eq!(board.state(), GameState::Won(Mark::O));

        let mut board = Board::new(3).unwrap();
        play(
            &mut board,
            &[(0, 2, Mark::X), (0, 0, Mark::O), (1, 1, Mark::X), (0, 1, Mark::O), (2, 0, Mark::X)],
        );
        assert_eq!(board.state(), GameState::Won(Mark::X));
    }

    #[test]
    fn test_line_one_short_is_not_a_win() {
        let mut board = Board::new(4).unwrap();
        play(
            &mut board,
            &[
                (0, 0, Mark::X),
                (3, 0, Mark::O),
                (1, 1, Mark::X),
                (3, 1, Mark::O),
                (2, 2, Mark::X),
                (3, 2, Mark::O),
            ],
        );
        assert_eq!(board.winner_mark(), None);
        assert_eq!(board.state(), GameState::Playing);

        board.apply(Move::new(3, 3), Mark::X).unwrap();
        assert_eq!(board.winner_mark(), Some(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut board = Board::new(3).unwrap();
        // X O X / X O O / O X X
        play(
            &mut board,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (0, 2, Mark::X),
                (1, 1, Mark::O),
                (1, 0, Mark::X),
                (1, 2, Mark::O),
                (2, 1, Mark::X),
                (2, 0, Mark::O),
                (2, 2, Mark::X),
            ],
        );
        assert_eq!(board.state(), GameState::Draw);
        assert_eq!(board.winner_mark(), None);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut board = Board::new(3).unwrap();
        // X O X / O X O / O X X, the last X completes the main diagonal
        play(
            &mut board,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (0, 2, Mark::X),
                (1, 0, Mark::O),
                (2, 1, Mark::X),
                (1, 2, Mark::O),
                (2, 2, Mark::X),
                (2, 0, Mark::O),
            ],
        );
        assert_eq!(board.state(), GameState::Playing);

        board.apply(Move::new(1, 1), Mark::X).unwrap();
        assert_eq!(board.empty_cells(), 0);
        assert_eq!(board.state(), GameState::Won(Mark::X));
    }

    #[test]
    fn test_winner_present_iff_state_is_won() {
        let mut board = Board::new(3).unwrap();
        let moves = [
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(0, 2),
        ];
        for mv in moves {
            let mark = if board.history().len() % 2 == 0 {
                Mark::X
            } else {
                Mark::O
            };
            board.apply(mv, mark).unwrap();
            let won = matches!(board.state(), GameState::Won(_));
            assert_eq!(board.winner_mark().is_some(), won);
        }
        assert!(board.winner_mark().is_some());
    }
}
