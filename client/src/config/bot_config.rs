use std::time::Duration;

use common::config::Validate;
use common::games::tictactoe::{
    Difficulty, FRIENDLY_THINKING_TIME, Mark, PRO_THINKING_TIME,
};
use serde::{Deserialize, Serialize};

const MAX_THINKING_TIME_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    pub difficulty: Difficulty,
    pub bot_mark: Mark,
    pub pro_thinking_time_ms: u64,
    pub friendly_thinking_time_ms: u64,
}

impl BotConfig {
    pub fn thinking_time(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Pro => Duration::from_millis(self.pro_thinking_time_ms),
            Difficulty::Friendly => Duration::from_millis(self.friendly_thinking_time_ms),
        }
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_mark == Mark::Empty {
            return Err("bot_mark must be X or O".to_string());
        }
        if self.pro_thinking_time_ms > MAX_THINKING_TIME_MS {
            return Err(format!("pro_thinking_time_ms must not exceed {}", MAX_THINKING_TIME_MS));
        }
        if self.friendly_thinking_time_ms > MAX_THINKING_TIME_MS {
            return Err(format!(
                "friendly_thinking_time_ms must not exceed {}",
                MAX_THINKING_TIME_MS
            ));
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Pro,
            bot_mark: Mark::O,
            pro_thinking_time_ms: PRO_THINKING_TIME.as_millis() as u64,
            friendly_thinking_time_ms: FRIENDLY_THINKING_TIME.as_millis() as u64,
        }
    }
}
