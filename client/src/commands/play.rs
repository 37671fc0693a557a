use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    BOT_NAME, Difficulty, GameMode, GameStatus, Mark, TicTacToeGameState,
};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::BotConfig;

const HELP: &str = "Commands: 0-8 place a mark, reset, pvp, pvbot, friendly, pro, help, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    Place(usize),
    Reset,
    Mode(GameMode),
    Difficulty(Difficulty),
    Help,
    Quit,
}

pub fn parse_play_input(line: &str) -> Result<PlayInput, String> {
    let line = line.trim().to_ascii_lowercase();
    if let Ok(index) = line.parse::<usize>() {
        return Ok(PlayInput::Place(index));
    }
    match line.as_str() {
        "reset" | "r" => Ok(PlayInput::Reset),
        "pvp" => Ok(PlayInput::Mode(GameMode::PlayerVsPlayer)),
        "pvbot" => Ok(PlayInput::Mode(GameMode::PlayerVsBot)),
        "help" | "?" => Ok(PlayInput::Help),
        "quit" | "q" | "exit" => Ok(PlayInput::Quit),
        other => other
            .parse::<Difficulty>()
            .map(PlayInput::Difficulty)
            .map_err(|_| format!("Unknown command '{}'. {}", other, HELP)),
    }
}

pub fn status_line(state: &TicTacToeGameState) -> String {
    match state.status {
        GameStatus::InProgress if state.is_bot_turn() => format!("{} is thinking...", BOT_NAME),
        GameStatus::InProgress => format!("Next player: {}", state.current_mark),
        GameStatus::Draw => "It's a Draw!".to_string(),
        GameStatus::XWon | GameStatus::OWon => {
            format!("{} Wins!", state.winner_name().unwrap_or_default())
        }
    }
}

pub async fn run_play(
    difficulty: Difficulty,
    bot_mark: Mark,
    bot_config: &BotConfig,
    no_delay: bool,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = TicTacToeGameState::new(GameMode::PlayerVsBot, difficulty, bot_mark)?;
    let mut rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    log!("New game against {} ({}), seed {}", BOT_NAME, difficulty, rng.seed());
    println!("{}", HELP);

    loop {
        while state.is_bot_turn() {
            println!("{}", status_line(&state));
            let delay = if no_delay {
                Duration::ZERO
            } else {
                bot_config.thinking_time(state.difficulty)
            };
            tokio::time::sleep(delay).await;
            if state.play_bot_turn(&mut rng).is_none() {
                break;
            }
        }

        println!("{}\n{}", state.board, status_line(&state));

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_play_input(&line) {
            Ok(PlayInput::Place(index)) => {
                if let Err(err) = state.place_mark(index) {
                    println!("{}", err);
                }
            }
            Ok(PlayInput::Reset) => state.reset(),
            Ok(PlayInput::Mode(mode)) => {
                log!("Switching to {:?}", mode);
                state.set_mode(mode);
            }
            Ok(PlayInput::Difficulty(difficulty)) => {
                log!("Switching {} to {}", BOT_NAME, difficulty);
                state.set_difficulty(difficulty);
            }
            Ok(PlayInput::Help) => println!("{}", HELP),
            Ok(PlayInput::Quit) => break,
            Err(err) => println!("{}", err),
        }
    }

    log!("Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_input() {
        assert_eq!(parse_play_input(" 4 "), Ok(PlayInput::Place(4)));
        assert_eq!(parse_play_input("12"), Ok(PlayInput::Place(12)));
        assert_eq!(parse_play_input("RESET"), Ok(PlayInput::Reset));
        assert_eq!(parse_play_input("pvp"), Ok(PlayInput::Mode(GameMode::PlayerVsPlayer)));
        assert_eq!(parse_play_input("Friendly"), Ok(PlayInput::Difficulty(Difficulty::Friendly)));
        assert_eq!(parse_play_input("q"), Ok(PlayInput::Quit));
        assert!(parse_play_input("jump").is_err());
    }

    #[test]
    fn test_status_line() {
        let mut state =
            TicTacToeGameState::new(GameMode::PlayerVsBot, Difficulty::Pro, Mark::O).unwrap();
        assert_eq!(status_line(&state), "Next player: X");

        state.place_mark(0).unwrap();
        assert_eq!(status_line(&state), "Ticky is thinking...");

        state.board = "XX_ OOO ___".parse().unwrap();
        state.status = GameStatus::OWon;
        assert_eq!(status_line(&state), "Ticky Wins!");

        state.set_mode(GameMode::PlayerVsPlayer);
        state.status = GameStatus::OWon;
        assert_eq!(status_line(&state), "Player O Wins!");

        state.status = GameStatus::Draw;
        assert_eq!(status_line(&state), "It's a Draw!");
    }
}
