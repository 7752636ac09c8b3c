use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::GameError;
use super::parallel::search_parallel;
use super::search::SearchEngine;
use super::session_rng::SessionRng;
use super::types::{GameState, Mark, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BotType {
    #[default]
    Minimax,
    ParallelMinimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotDecision {
    pub mv: Move,
    /// Minimax value for the bot's mark, `None` for the random bot.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &mut Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Result<BotDecision, GameError> {
    match bot_type {
        BotType::Minimax => {
            let outcome = SearchEngine::new().search(board, mark)?;
            Ok(BotDecision {
                mv: outcome.best_move,
                score: Some(outcome.score),
                nodes: outcome.nodes,
            })
        }
        BotType::ParallelMinimax => {
            let outcome = search_parallel(board, mark)?;
            Ok(BotDecision {
                mv: outcome.best_move,
                score: Some(outcome.score),
                nodes: outcome.nodes,
            })
        }
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<BotDecision, GameError> {
    let state = board.state();
    if state != GameState::Playing {
        return Err(GameError::NoSearchPossible(state));
    }

    let available_moves = board.legal_moves();
    let idx = rng.random_index(available_moves.len());
    Ok(BotDecision {
        mv: available_moves[idx],
        score: None,
        nodes: 0,
    })
}
