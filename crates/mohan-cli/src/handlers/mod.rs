pub mod ask;
pub mod catalog;
pub mod config;
pub mod sections;
pub mod snapshot;
pub mod tui;
