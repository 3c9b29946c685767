use std::time::Duration;

use serde::Deserialize;

use common::config::Validate;
use common::game::{FieldSize, GameSettings};

#[derive(Debug, PartialEq, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("field_width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("field_height must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 50 and 5000".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval_ms: 200,
        }
    }
}

impl From<&GameConfig> for GameSettings {
    fn from(config: &GameConfig) -> Self {
        GameSettings {
            field_size: FieldSize::new(config.field_width as i32, config.field_height as i32),
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            ..GameSettings::default()
        }
    }
}
