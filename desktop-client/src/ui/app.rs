use eframe::egui;
use tokio::sync::mpsc;

use common::game::{Direction, GamePhase, KeyInput};
use common::session::InputCommand;

use crate::state::SharedState;

use super::{game_view, menus};

const ARROW_KEYS: [(egui::Key, Direction); 4] = [
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
];

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<InputCommand>,
}

impl GameApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<InputCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
        }
    }

    /// Maps arrow keys to direction requests and any other key press to a
    /// generic trigger. Phase handling lives in the state machine, so the
    /// adapter forwards everything it sees.
    fn handle_input(&self, ctx: &egui::Context) {
        ctx.input(|i| {
            for (key, direction) in ARROW_KEYS {
                if i.key_pressed(key) {
                    let _ = self
                        .command_tx
                        .send(InputCommand::Key(KeyInput::Direction(direction)));
                }
            }

            let other_pressed = i.events.iter().any(|event| {
                matches!(
                    event,
                    egui::Event::Key { key, pressed: true, .. }
                        if !ARROW_KEYS.iter().any(|(arrow, _)| arrow == key)
                )
            });
            if other_pressed {
                let _ = self.command_tx.send(InputCommand::Key(KeyInput::Other));
            }
        });
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let snapshot = self.shared_state.snapshot();
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(snapshot) = snapshot else {
                return;
            };
            match snapshot.phase {
                GamePhase::Start => menus::draw_start_menu(ui),
                GamePhase::Playing => game_view::draw_board(ui, &snapshot),
                GamePhase::GameOver => menus::draw_game_over(ui, &snapshot),
            }
        });

        // The simulation ticks on its own cadence; keep frames coming so
        // published snapshots show up without waiting for input.
        ctx.request_repaint();
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        let _ = self.command_tx.send(InputCommand::Quit);
    }
}
