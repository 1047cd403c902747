//! # Presentation Layer
//!
//! Turns dashboard state into something a person (or a script) can read.
//! The layering follows MVVM:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                   (pure fn)         (Serialize)       (driver)   ==(Text)==> [ View ] (fmt::Display)
//!                                                           |
//!                                                           +======(TUI)=====> [ View ] (ratatui Widget)
//! ```
//!
//! ## Rules
//!
//! * **Presenters** read `DashboardState` and the `Catalog` and build view
//!   models. They never print and never touch the terminal.
//! * **View models** are plain `Serialize` data. `--format json` dumps them
//!   as-is, so field names are part of the CLI's output contract.
//! * **Views** own layout, colors and bar drawing. A view never looks at
//!   engine types.
//! * **Renderers** pick the output path. The TUI renderer also owns the key
//!   loop; keys become engine `Action`s through `renderers::tui::keymap`.
//!
//! Missing catalog entries are not errors here: presenters turn them into a
//! `Lookup::Missing` placeholder and the views render its message.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
