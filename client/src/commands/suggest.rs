use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    BOT_NAME, Board, BotInput, Difficulty, Mark, calculate_move, check_win,
};
use common::{log, log_debug};

pub async fn run_suggest(
    board: &str,
    bot_mark: Mark,
    difficulty: Difficulty,
    thinking_time: Duration,
    seed: Option<u64>,
) -> Result<Option<usize>, Box<dyn std::error::Error>> {
    let board: Board = board.parse()?;
    let human_mark = bot_mark
        .opponent()
        .ok_or_else(|| format!("{} must play X or O", BOT_NAME))?;

    if let Some(winner) = check_win(&board) {
        log!("Game is already over, {} has won", winner);
        return Ok(None);
    }

    let mut rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log_debug!("Suggesting for {} ({}), seed {}:\n{}", bot_mark, difficulty, rng.seed(), board);

    if !thinking_time.is_zero() {
        log!("{} is thinking...", BOT_NAME);
        tokio::time::sleep(thinking_time).await;
    }

    let input = BotInput::new(board, bot_mark, human_mark);
    let suggestion = calculate_move(difficulty, input, &mut rng);
    match suggestion {
        Some(index) => {
            log!("{} ({}) plays cell {}", BOT_NAME, difficulty, index);
            println!("{}", board.with_mark(index, bot_mark));
        }
        None => log!("Board is full, no move left"),
    }
    Ok(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suggest_blocks() {
        let result = run_suggest("XX_ _O_ ___", Mark::O, Difficulty::Pro, Duration::ZERO, Some(1))
            .await
            .unwrap();
        assert_eq!(result, Some(2));
    }

    #[tokio::test]
    async fn test_suggest_full_board() {
        let result = run_suggest("XOX XOO OXX", Mark::O, Difficulty::Friendly, Duration::ZERO, None)
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_suggest_finished_game() {
        let result = run_suggest("XXX OO_ ___", Mark::O, Difficulty::Pro, Duration::ZERO, None)
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_suggest_rejects_bad_board() {
        assert!(run_suggest("XX", Mark::O, Difficulty::Pro, Duration::ZERO, None).await.is_err());
        assert!(run_suggest("_________", Mark::Empty, Difficulty::Pro, Duration::ZERO, None).await.is_err());
    }
}
