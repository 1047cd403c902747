pub mod config;
mod driver;
pub mod error;

pub use config::{Config, resolve_data_dir};
pub use driver::DashboardRuntime;
pub use error::{Error, Result};
