use crate::games::RandomSource;
use super::board::{Board, CELL_COUNT, CENTER, CORNERS, OPENING_MOVES, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

const TAKE_WIN_PROBABILITY: f64 = 0.7;
const BLOCK_PROBABILITY: f64 = 0.6;
const CENTER_PROBABILITY: f64 = 0.5;
const CORNER_PROBABILITY: f64 = 0.4;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub human_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark, human_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            human_mark,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self::new(state.board, state.bot_mark, state.human_mark())
    }
}

/// Picks Ticky's next cell. `None` only when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    let empty_cells = input.board.empty_count();
    if empty_cells == 0 {
        return None;
    }

    if empty_cells == CELL_COUNT {
        return Some(calculate_opening_move(rng));
    }

    match difficulty {
        Difficulty::Friendly => calculate_friendly_move(&input, rng),
        Difficulty::Pro => calculate_minimax_move(&input),
    }
}

/// Center or a corner, uniformly. Every one of them is an optimal first move.
pub fn calculate_opening_move(rng: &mut impl RandomSource) -> usize {
    OPENING_MOVES[rng.pick(OPENING_MOVES.len())]
}

/// Full-depth alpha-beta search. Ties go to the lowest index.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&input.board) {
        board.set(index, input.bot_mark);

        let score = minimax(
            &mut board,
            0,
            false,
            input.bot_mark,
            input.human_mark,
            i32::MIN,
            i32::MAX,
        );

        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    human_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }

            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, human_mark, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }

            board.set(index, human_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, human_mark, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Layered coin flips: win, block, center, corner, then anything.
/// Each step only fires when its own coin lands and its cell exists.
pub fn calculate_friendly_move(input: &BotInput, rng: &mut impl RandomSource) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    if rng.chance(TAKE_WIN_PROBABILITY) {
        if let Some(index) = find_winning_move(&input.board, input.bot_mark) {
            return Some(index);
        }
    }

    if rng.chance(BLOCK_PROBABILITY) {
        if let Some(index) = find_winning_move(&input.board, input.human_mark) {
            return Some(index);
        }
    }

    if input.board.is_cell_empty(CENTER) && rng.chance(CENTER_PROBABILITY) {
        return Some(CENTER);
    }

    let free_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| input.board.is_cell_empty(index))
        .collect();
    if !free_corners.is_empty() && rng.chance(CORNER_PROBABILITY) {
        return Some(free_corners[rng.pick(free_corners.len())]);
    }

    Some(available_moves[rng.pick(available_moves.len())])
}

/// Lowest empty cell that completes a line for `mark`.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    get_available_moves(board)
        .into_iter()
        .find(|&index| check_win(&board.with_mark(index, mark)) == Some(mark))
}
