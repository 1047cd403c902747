mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use mohan_types::Role;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mohan")]
#[command(about = "Workforce dashboard: strategy drift, workflow traces and team pulse", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Dashboard role (defaults to the configured role)")]
    pub role: Option<Role>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Replace the builtin catalog with a JSON file")]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true, help = "Show metric values without the count-up animation")]
    pub no_animation: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
