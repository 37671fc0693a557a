use common::config::Validate;
use serde::{Deserialize, Serialize};

const MAX_GAMES: u32 = 100_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SimulationConfig {
    pub games: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > MAX_GAMES {
            return Err(format!("games must not exceed {}", MAX_GAMES));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
        }
    }
}
