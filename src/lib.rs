pub mod app;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod events;
pub mod fleet;
pub mod meter;
pub mod surface;
pub mod theme;
pub mod ticker;
pub mod ui;

pub use app::App;
