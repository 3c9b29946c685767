use std::time::Duration;

use super::types::{Direction, FieldSize, Point};

/// Engine-side settings. Front ends build this from their own config
/// layer; tests construct it directly.
#[derive(Clone, Debug)]
pub struct GameSettings {
    pub field_size: FieldSize,
    pub start_position: Point,
    pub start_direction: Direction,
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::new(20, 20),
            start_position: Point::new(6, 9),
            start_direction: Direction::Right,
            tick_interval: Duration::from_millis(200),
        }
    }
}
