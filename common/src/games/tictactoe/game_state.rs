use std::time::Duration;

use crate::games::RandomSource;
use crate::log_debug;
use super::board::{Board, CELL_COUNT};
use super::bot_controller::{BotInput, calculate_move};
use super::types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};
use super::win_detector::check_win_with_line;

pub const BOT_NAME: &str = "Ticky";

pub const PRO_THINKING_TIME: Duration = Duration::from_millis(800);
pub const FRIENDLY_THINKING_TIME: Duration = Duration::from_millis(500);

/// Pause a front end shows before revealing Ticky's move.
pub fn default_thinking_time(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Pro => PRO_THINKING_TIME,
        Difficulty::Friendly => FRIENDLY_THINKING_TIME,
    }
}

/// One game on one board. X always moves first; in [`GameMode::PlayerVsBot`]
/// Ticky plays `bot_mark` and every other move belongs to the human.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, difficulty: Difficulty, bot_mark: Mark) -> Result<Self, String> {
        if bot_mark == Mark::Empty {
            return Err("Ticky must play X or O".to_string());
        }

        Ok(Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            difficulty,
            bot_mark,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        })
    }

    pub fn human_mark(&self) -> Mark {
        self.bot_mark.opponent().unwrap_or(Mark::X)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsBot
            && self.status == GameStatus::InProgress
            && self.current_mark == self.bot_mark
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.is_bot_turn() {
            return Err(format!("Not your turn, {} is thinking", BOT_NAME));
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_cell_empty(index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.apply_move(index);
        Ok(())
    }

    /// Lets Ticky move if it is its turn. Returns the cell it played.
    pub fn play_bot_turn(&mut self, rng: &mut impl RandomSource) -> Option<usize> {
        if !self.is_bot_turn() {
            return None;
        }

        let index = calculate_move(self.difficulty, BotInput::from_game_state(self), rng)?;
        log_debug!("{} ({}) plays {} as {}", BOT_NAME, self.difficulty, index, self.bot_mark);
        self.apply_move(index);
        Some(index)
    }

    fn apply_move(&mut self, index: usize) {
        self.board.set(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.winning_line = Some(line);
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning_line = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Switching tiers mid-game restarts it, but only when Ticky is playing.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.mode == GameMode::PlayerVsBot {
            self.reset();
        }
    }

    pub fn winner_name(&self) -> Option<String> {
        let winner = self.status.winner()?;
        if self.mode == GameMode::PlayerVsBot && winner == self.bot_mark {
            Some(BOT_NAME.to_string())
        } else {
            Some(format!("Player {}", winner))
        }
    }

    pub fn thinking_time(&self) -> Duration {
        default_thinking_time(self.difficulty)
    }
}
