// Binary front-end: argument parsing, command handlers and the presentation
// layer (presenters -> view models -> console/ratatui views).

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{CatalogCommand, Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;
