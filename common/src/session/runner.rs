use tokio::sync::mpsc;

use crate::game::{Game, GameEvent, GameSettings, SessionRng};
use crate::highscore::HighScoreStore;
use crate::log;

use super::scheduler::TickScheduler;
use super::{AudioCue, AudioSink, GameSnapshot, InputCommand, StateBroadcaster};

/// Owns the game state for the lifetime of the process: merges the fixed
/// tick cadence with keyboard commands, forwards audio cues, persists the
/// high score at game-over and publishes a snapshot after every change.
///
/// Returns when a `Quit` command arrives or the command channel closes.
pub async fn run_session<B, A>(
    settings: GameSettings,
    store: HighScoreStore,
    mut rng: SessionRng,
    mut command_rx: mpsc::UnboundedReceiver<InputCommand>,
    broadcaster: B,
    audio: A,
) where
    B: StateBroadcaster,
    A: AudioSink,
{
    let mut game = Game::new(settings.clone(), store.load(), &mut rng);

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let _scheduler = TickScheduler::spawn(settings.tick_interval, tick_tx);

    audio.play(AudioCue::MenuMusicStart);
    broadcaster.publish(GameSnapshot::of(&game)).await;

    loop {
        let events = tokio::select! {
            Some(()) = tick_rx.recv() => game.tick(&mut rng),
            command = command_rx.recv() => match command {
                Some(InputCommand::Key(key)) => game.handle_key(key, &mut rng),
                Some(InputCommand::Quit) | None => break,
            },
        };

        for event in &events {
            dispatch_event(event, &store, &audio);
        }
        broadcaster.publish(GameSnapshot::of(&game)).await;
    }

    log!("Session finished");
}

fn dispatch_event<A: AudioSink>(event: &GameEvent, store: &HighScoreStore, audio: &A) {
    match event {
        GameEvent::GameStarted => audio.play(AudioCue::MenuMusicStop),
        GameEvent::GameRestarted => {}
        GameEvent::FoodEaten { .. } => audio.play(AudioCue::Eat),
        GameEvent::GameOver {
            high_score,
            new_record,
            ..
        } => {
            audio.play(AudioCue::GameOver);
            if *new_record
                && let Err(err) = store.save(*high_score)
            {
                // Losing a high-score write is not game-breaking.
                log!("Failed to save high score: {}", err);
            }
        }
    }
}
