pub mod assistant;
pub mod commands;
pub mod common;
pub mod result;
pub mod screen;
pub mod sections;

pub use assistant::*;
pub use commands::*;
pub use common::{Guidance, Lookup, PlaceholderViewModel, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
pub use screen::*;
pub use sections::*;
