mod runner;
mod scheduler;

use std::future::Future;

pub use runner::run_session;
pub use scheduler::TickScheduler;

use crate::game::{FieldSize, Game, GamePhase, KeyInput, Point};

/// Command from the input adapter to the session loop. Only the most
/// recent direction request before a tick takes effect; the buffering
/// lives in the snake, not in the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Key(KeyInput),
    Quit,
}

/// Fire-and-forget audio signal. The session never waits on playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Eat,
    GameOver,
    MenuMusicStart,
    MenuMusicStop,
}

pub trait AudioSink {
    fn play(&self, cue: AudioCue);
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub body: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub field_size: FieldSize,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            body: game.snake().body.iter().copied().collect(),
            food: game.food().position(),
            score: game.score(),
            high_score: game.high_score(),
            field_size: game.settings().field_size,
        }
    }
}

pub trait StateBroadcaster {
    fn publish(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
