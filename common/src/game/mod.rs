mod events;
mod food;
mod game_state;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use events::{GameEvent, GameOverReason};
pub use food::Food;
pub use game_state::Game;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{Direction, FieldSize, GamePhase, KeyInput, Point};
