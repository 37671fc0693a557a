use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{BotConfig, SimulationConfig};

const CONFIG_FILE_NAME: &str = "ticky_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise `ticky_config.yaml` next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.bot.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{Difficulty, Mark};
    use std::time::Duration;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_ticky_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bot.difficulty, Difficulty::Pro);
        assert_eq!(config.bot.bot_mark, Mark::O);
        assert_eq!(config.bot.thinking_time(Difficulty::Pro), Duration::from_millis(800));
        assert_eq!(config.bot.thinking_time(Difficulty::Friendly), Duration::from_millis(500));
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(serialized.contains("difficulty: pro"));
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            bot: BotConfig {
                difficulty: Difficulty::Friendly,
                bot_mark: Mark::X,
                pro_thinking_time_ms: 0,
                friendly_thinking_time_ms: 250,
            },
            simulation: SimulationConfig {
                games: 42,
                seed: Some(7),
            },
        };

        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_simulation_section_is_optional() {
        let content = "bot:\n  difficulty: friendly\n  bot_mark: O\n  pro_thinking_time_ms: 800\n  friendly_thinking_time_ms: 500\n";
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        provider.set_config_content(content).unwrap();
        let config: Config = YamlConfigSerializer::new()
            .deserialize(&provider.get_config_content().unwrap().unwrap())
            .unwrap();
        assert_eq!(config.bot.difficulty, Difficulty::Friendly);
        assert_eq!(config.simulation, SimulationConfig::default());
        let _ = std::fs::remove_file(provider.path());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.bot.bot_mark = Mark::Empty;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.bot.pro_thinking_time_ms = 10_000;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.simulation.games = 0;
        assert!(config.validate().is_err());
    }
}
