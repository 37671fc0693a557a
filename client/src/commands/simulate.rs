use std::fmt;

use common::games::tictactoe::{
    Board, BotInput, Difficulty, GameStatus, Mark, calculate_move, check_win,
};
use common::games::{RandomSource, SessionRng};
use common::log;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchTally {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for MatchTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {} ({} games)",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.total()
        )
    }
}

/// Plays one bot-vs-bot game from an empty board. X moves first.
pub fn play_match(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> GameStatus {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    loop {
        if let Some(winner) = check_win(&board) {
            return if winner == Mark::X { GameStatus::XWon } else { GameStatus::OWon };
        }

        let difficulty = if current_mark == Mark::X { x_difficulty } else { o_difficulty };
        let human_mark = current_mark.opponent().unwrap_or(Mark::X);
        let input = BotInput::new(board, current_mark, human_mark);
        let Some(index) = calculate_move(difficulty, input, rng) else {
            return GameStatus::Draw;
        };

        board = board.with_mark(index, current_mark);
        current_mark = human_mark;
    }
}

pub fn run_matches(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    games: u32,
    rng: &mut impl RandomSource,
) -> MatchTally {
    let mut tally = MatchTally::default();
    for _ in 0..games {
        tally.record(play_match(x_difficulty, o_difficulty, rng));
    }
    tally
}

pub async fn run_simulate(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<MatchTally, Box<dyn std::error::Error>> {
    let mut rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!(
        "Simulating {} games: X={} vs O={} (seed {})",
        games,
        x_difficulty,
        o_difficulty,
        rng.seed()
    );

    let tally = tokio::task::spawn_blocking(move || {
        run_matches(x_difficulty, o_difficulty, games, &mut rng)
    })
    .await?;

    log!("{}", tally);
    Ok(tally)
}
