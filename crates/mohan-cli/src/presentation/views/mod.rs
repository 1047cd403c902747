// Views own layout and styling. Console views implement `fmt::Display`,
// TUI views implement ratatui's `Widget`.

pub mod assistant;
pub mod commands;
pub mod screen;
pub mod tui;

pub use assistant::AssistantPanelView;
pub use screen::ScreenView;
