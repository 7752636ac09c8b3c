use std::io::{BufRead, Write};

use thiserror::Error;
use tictactoe_engine::config::GameConfig;
use tictactoe_engine::{
    Board, BotType, GameError, GameState, Mark, Move, SessionRng, calculate_move, debug_log, log,
};

use crate::input::parse_coordinate;
use crate::render::render_board;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before the game finished")]
    InputClosed,

    #[error(transparent)]
    Game(#[from] GameError),
}

/// One human-versus-bot game over a line-based reader and a writer.
pub struct TerminalSession<R, W> {
    input: R,
    output: W,
    board: Board,
    human_mark: Mark,
    bot: BotType,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(input: R, output: W, config: &GameConfig, mut rng: SessionRng) -> Result<Self, SessionError> {
        let board = Board::new(config.board_size)?;
        let human_mark = config.first_player.human_mark(&mut rng);

        Ok(Self {
            input,
            output,
            board,
            human_mark,
            bot: config.bot,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn run(&mut self) -> Result<GameState, SessionError> {
        let size = self.board.size();
        writeln!(self.output, "\nTic-tac-toe {size}x{size} against the AI")?;
        writeln!(
            self.output,
            "You play {}, the AI plays {}. X moves first.",
            self.human_mark,
            self.human_mark.opponent()
        )?;
        self.print_board()?;

        let mut current = Mark::X;
        while self.board.state() == GameState::Playing {
            if current == self.human_mark {
                self.human_turn()?;
            } else {
                self.ai_turn(current)?;
            }
            if let Some(mv) = self.board.last_move() {
                debug_log!("{} played {}", current, mv);
            }
            self.print_board()?;
            current = current.opponent();
        }

        let state = self.board.state();
        self.print_result(state)?;
        Ok(state)
    }

    fn human_turn(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nYour turn ({})", self.human_mark)?;
        loop {
            let Some(mv) = self.prompt_move()? else {
                continue;
            };

            if !self.board.is_valid_move(mv) {
                writeln!(
                    self.output,
                    "\nInvalid move. Choose an empty cell using numbers 1-{}. Try again.",
                    self.board.size()
                )?;
                continue;
            }

            self.board.apply(mv, self.human_mark)?;
            return Ok(());
        }
    }

    /// Reads a row and a column. `None` when either could not be parsed.
    fn prompt_move(&mut self) -> Result<Option<Move>, SessionError> {
        let size = self.board.size();

        let row_text = self.prompt(&format!("Choose row (1-{size}): "))?;
        let row = match parse_coordinate(&row_text, size) {
            Ok(row) => row,
            Err(err) => {
                writeln!(self.output, "Invalid input: {err}. Enter numbers 1-{size}.")?;
                return Ok(None);
            }
        };

        let col_text = self.prompt(&format!("Choose column (1-{size}): "))?;
        let col = match parse_coordinate(&col_text, size) {
            Ok(col) => col,
            Err(err) => {
                writeln!(self.output, "Invalid input: {err}. Enter numbers 1-{size}.")?;
                return Ok(None);
            }
        };

        Ok(Some(Move::new(row, col)))
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }

    fn ai_turn(&mut self, mark: Mark) -> Result<(), SessionError> {
        writeln!(self.output, "\nAI turn ({mark})")?;
        writeln!(self.output, "Calculating move...")?;

        let decision = calculate_move(self.bot, &mut self.board, mark, &mut self.rng)?;
        match decision.score {
            Some(score) => log!(
                "AI {:?} chose {} with score {} after {} nodes",
                self.bot,
                decision.mv,
                score,
                decision.nodes
            ),
            None => log!("AI {:?} chose {}", self.bot, decision.mv),
        }

        writeln!(
            self.output,
            "AI chose row {}, column {}",
            decision.mv.row + 1,
            decision.mv.col + 1
        )?;
        self.board.apply(decision.mv, mark)?;
        Ok(())
    }

    fn print_board(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nCurrent board")?;
        writeln!(self.output, "{}", render_board(&self.board))?;
        Ok(())
    }

    fn print_result(&mut self, state: GameState) -> Result<(), SessionError> {
        match state {
            GameState::Draw => writeln!(self.output, "\nIt's a draw!")?,
            GameState::Won(mark) if mark == self.human_mark => {
                writeln!(self.output, "\nCongratulations! You ({mark}) won!")?
            }
            GameState::Won(mark) => writeln!(self.output, "\nThe AI ({mark}) won!")?,
            GameState::Playing => {}
        }
        Ok(())
    }
}
