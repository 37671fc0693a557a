mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{
    Board, BoardParseError, CELL_COUNT, CENTER, CORNERS, OPENING_MOVES, get_available_moves,
};
pub use bot_controller::{
    BotInput, calculate_friendly_move, calculate_minimax_move, calculate_move,
    calculate_opening_move, find_winning_move,
};
pub use game_state::{
    BOT_NAME, FRIENDLY_THINKING_TIME, PRO_THINKING_TIME, TicTacToeGameState,
    default_thinking_time,
};
pub use types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_game_over};
