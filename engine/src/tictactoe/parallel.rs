use rayon::prelude::*;

use super::board::Board;
use super::error::GameError;
use super::search::{SearchEngine, SearchOutcome};
use super::types::{GameState, Mark, Move};

/// Root-split minimax: every root move is searched on its own copy of the
/// board on the rayon pool. Scores are merged in `legal_moves` order with the
/// same strict comparison as the sequential search, so both variants pick the
/// same move.
pub fn search_parallel(board: &Board, searching_mark: Mark) -> Result<SearchOutcome, GameError> {
    let state = board.state();
    if state != GameState::Playing {
        return Err(GameError::NoSearchPossible(state));
    }

    let roots = board.legal_moves();

    let results: Vec<(Move, i32, u64, usize)> = roots
        .par_iter()
        .map(|&mv| {
            let mut local = board.clone();
            let mut engine = SearchEngine::new();
            local.place(mv, searching_mark);
            let (score, _) = engine.value_and_move(&mut local, false, searching_mark, 1);
            let (nodes, max_depth) = engine.stats();
            (mv, score, nodes, max_depth)
        })
        .collect();

    let mut best: Option<(Move, i32)> = None;
    let mut nodes = 1;
    let mut max_depth = 0;

    for (mv, score, subtree_nodes, subtree_depth) in results {
        nodes += subtree_nodes;
        max_depth = max_depth.max(subtree_depth);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    let (best_move, score) = best.ok_or(GameError::NoSearchPossible(state))?;

    Ok(SearchOutcome {
        best_move,
        score,
        nodes,
        max_depth,
    })
}

pub fn best_move_parallel(board: &Board, searching_mark: Mark) -> Result<Move, GameError> {
    search_parallel(board, searching_mark).map(|outcome| outcome.best_move)
}
