pub mod assistant;
pub mod commands;
pub mod screen;
pub mod sections;

pub use assistant::{latest_analysis, present_assistant, present_message};
pub use commands::{
    present_ask, present_catalog_check, present_config, present_config_init, present_config_path,
    present_sections,
};
pub use screen::present_screen;
pub use sections::present_section;
