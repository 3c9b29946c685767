use eframe::egui;

use common::game::{FieldSize, Point};
use common::session::GameSnapshot;

pub const CELL_SIZE: f32 = 30.0;
pub const BOARD_OFFSET: f32 = 50.0;

pub const COLOR_BOARD: egui::Color32 = egui::Color32::from_rgb(179, 217, 255);
pub const COLOR_SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(26, 117, 255);
pub const COLOR_SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(126, 161, 255);
pub const COLOR_FOOD: egui::Color32 = egui::Color32::from_rgb(204, 0, 0);
pub const COLOR_FRAME: egui::Color32 = egui::Color32::from_rgb(120, 120, 120);
pub const COLOR_TEXT: egui::Color32 = egui::Color32::BLACK;

pub fn window_size(field: FieldSize) -> egui::Vec2 {
    egui::Vec2::new(
        2.0 * BOARD_OFFSET + field.width as f32 * CELL_SIZE,
        2.0 * BOARD_OFFSET + field.height as f32 * CELL_SIZE,
    )
}

pub fn draw_board(ui: &mut egui::Ui, snapshot: &GameSnapshot) {
    let (response, painter) =
        ui.allocate_painter(window_size(snapshot.field_size), egui::Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, COLOR_FRAME);

    let board_rect = egui::Rect::from_min_size(
        origin + egui::vec2(BOARD_OFFSET, BOARD_OFFSET),
        egui::vec2(
            snapshot.field_size.width as f32 * CELL_SIZE,
            snapshot.field_size.height as f32 * CELL_SIZE,
        ),
    );
    painter.rect_filled(board_rect.expand(2.0), 0.0, egui::Color32::BLACK);
    painter.rect_filled(board_rect, 0.0, COLOR_BOARD);

    painter.rect_filled(cell_rect(board_rect, snapshot.food), 4.0, COLOR_FOOD);

    for (index, segment) in snapshot.body.iter().enumerate() {
        let color = if index == 0 {
            COLOR_SNAKE_HEAD
        } else {
            COLOR_SNAKE_BODY
        };
        painter.rect_filled(cell_rect(board_rect, *segment).shrink(1.0), 2.0, color);
    }

    painter.text(
        origin + egui::vec2(BOARD_OFFSET, BOARD_OFFSET - 20.0),
        egui::Align2::LEFT_CENTER,
        format!("Score: {}", snapshot.score),
        egui::FontId::proportional(24.0),
        COLOR_TEXT,
    );
    painter.text(
        egui::pos2(response.rect.max.x - BOARD_OFFSET, origin.y + BOARD_OFFSET - 20.0),
        egui::Align2::RIGHT_CENTER,
        format!("High Score: {}", snapshot.high_score),
        egui::FontId::proportional(24.0),
        COLOR_TEXT,
    );
}

fn cell_rect(board_rect: egui::Rect, cell: Point) -> egui::Rect {
    egui::Rect::from_min_size(
        board_rect.min + egui::vec2(cell.x as f32 * CELL_SIZE, cell.y as f32 * CELL_SIZE),
        egui::vec2(CELL_SIZE, CELL_SIZE),
    )
}
