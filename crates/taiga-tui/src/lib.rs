pub mod app;
pub mod continuations;
pub mod controllers;
pub mod events;
pub mod keybindings;
pub mod overlay;
pub mod signals;
pub mod theme;
pub mod ui;
pub mod views;
pub mod widgets;

pub use app::App;
pub use controllers::{BacklogController, ProjectDetailController, SprintController};
