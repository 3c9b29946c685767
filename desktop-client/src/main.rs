mod audio;
mod broadcaster;
mod config;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::game::{GameSettings, SessionRng};
use common::highscore::HighScoreStore;
use common::session::run_session;
use common::{log, logger};

use audio::LogAudioPlayer;
use broadcaster::LocalBroadcaster;
use state::SharedState;
use ui::GameApp;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Path to the YAML configuration; defaults apply when missing.
    #[arg(long, default_value = "snake_config.yaml")]
    config: String,

    /// Fixed session seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::load_config(&args.config)?;
    let settings = GameSettings::from(&config.game);
    let store = HighScoreStore::new(config.high_score_file.as_str());

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting session with seed {}", rng.seed());

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let audio = LogAudioPlayer::new(config.audio.enabled);
    let session_settings = settings.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(run_session(
            session_settings,
            store,
            rng,
            command_rx,
            broadcaster,
            audio,
        ));
    });

    let window_size = ui::window_size(settings.field_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
