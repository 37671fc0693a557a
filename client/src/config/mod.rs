mod bot_config;
mod config;
mod simulation_config;

pub use bot_config::BotConfig;
pub use config::{Config, get_config_manager};
pub use simulation_config::SimulationConfig;
