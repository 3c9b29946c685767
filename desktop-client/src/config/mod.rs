mod audio_config;
mod game_config;
mod main_config;

pub use audio_config::AudioConfig;
pub use game_config::GameConfig;
pub use main_config::{load_config, Config};
