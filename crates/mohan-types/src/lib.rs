pub mod chat;
pub mod domain;
pub mod error;
pub mod role;

pub use chat::*;
pub use domain::*;
pub use error::{Error, Result};
pub use role::*;
