use eframe::egui;

use common::session::GameSnapshot;

use super::game_view::COLOR_TEXT;

const COLOR_TITLE: egui::Color32 = egui::Color32::from_rgb(26, 117, 255);
const COLOR_HINT: egui::Color32 = egui::Color32::from_rgb(126, 161, 255);
const COLOR_GAME_OVER: egui::Color32 = egui::Color32::from_rgb(204, 0, 0);

pub fn draw_start_menu(ui: &mut egui::Ui) {
    let (center, painter, time) = menu_painter(ui);

    painter.text(
        center + egui::vec2(0.0, -50.0),
        egui::Align2::CENTER_CENTER,
        "Snake Game",
        egui::FontId::proportional(48.0),
        COLOR_TITLE,
    );

    // Blink roughly twice a second, like the original start screen.
    if (time * 2.0) as i64 % 2 == 0 {
        painter.text(
            center + egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "Press any key to start",
            egui::FontId::proportional(24.0),
            COLOR_HINT,
        );
    }
}

pub fn draw_game_over(ui: &mut egui::Ui, snapshot: &GameSnapshot) {
    let (center, painter, _) = menu_painter(ui);

    painter.text(
        center + egui::vec2(0.0, -50.0),
        egui::Align2::CENTER_CENTER,
        "GAME OVER",
        egui::FontId::proportional(48.0),
        COLOR_GAME_OVER,
    );
    painter.text(
        center + egui::vec2(0.0, 10.0),
        egui::Align2::CENTER_CENTER,
        "Press any key to restart",
        egui::FontId::proportional(24.0),
        COLOR_HINT,
    );
    painter.text(
        center + egui::vec2(0.0, 90.0),
        egui::Align2::CENTER_CENTER,
        format!("Score: {}", snapshot.score),
        egui::FontId::proportional(24.0),
        COLOR_TEXT,
    );
}

fn menu_painter(ui: &mut egui::Ui) -> (egui::Pos2, egui::Painter, f64) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);
    let time = ui.input(|i| i.time);
    (response.rect.center(), painter, time)
}
