#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
}

/// Emitted by the state machine for the session loop to act on. The
/// engine itself never touches audio or the high-score file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    GameRestarted,
    FoodEaten {
        score: u32,
    },
    GameOver {
        reason: GameOverReason,
        score: u32,
        high_score: u32,
        new_record: bool,
    },
}
