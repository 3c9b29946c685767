mod app;
mod game_view;
mod menus;

pub use app::GameApp;
pub use game_view::window_size;
