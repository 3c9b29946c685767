pub mod config;
pub mod game;
pub mod highscore;
pub mod logger;
pub mod session;
