use serde::Deserialize;

use common::config::{ConfigManager, Validate};

use super::{AudioConfig, GameConfig};

#[derive(Debug, PartialEq, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub audio: AudioConfig,
    pub high_score_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            audio: AudioConfig::default(),
            high_score_file: "high_score.txt".to_string(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

pub fn load_config(file_path: &str) -> Result<Config, String> {
    ConfigManager::from_yaml_file(file_path).get_config()
}
