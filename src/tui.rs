pub mod app;
pub mod board;
pub mod cursor;
pub mod dispatch;
pub mod menu;
pub mod prompt;
pub mod render;

pub use app::App;
