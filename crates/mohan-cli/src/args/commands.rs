use super::enums::{PanelArg, ScenarioArg, parse_memory_tab};
use clap::Subcommand;
use mohan_types::{MemoryTab, Section};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Tui,

    #[command(about = "Print one frame of the dashboard without a terminal UI")]
    Snapshot {
        #[arg(long, help = "Section to show (slug or title)")]
        section: Option<Section>,

        #[arg(long, help = "Drift key on the Strategy Trace page")]
        drift: Option<String>,

        #[arg(long, help = "Workflow trace id")]
        trace: Option<String>,

        #[arg(long, help = "Workflow stage id")]
        stage: Option<String>,

        #[arg(long, help = "Team Pulse department (\"all\" for every department)")]
        department: Option<String>,

        #[arg(long, value_parser = parse_memory_tab, help = "Memory Recall tab")]
        tab: Option<MemoryTab>,

        #[arg(long, help = "Search text for memories or workflow logs")]
        search: Option<String>,

        #[arg(long = "open", value_enum, help = "Panels to show open")]
        panels: Vec<PanelArg>,
    },

    #[command(about = "Ask the simulated assistant one question and print its reply")]
    Ask {
        text: String,

        #[arg(long, value_enum, help = "Employee scenario tag")]
        scenario: Option<ScenarioArg>,

        #[arg(long, help = "Reply immediately instead of waiting the configured delay")]
        no_delay: bool,
    },

    #[command(about = "List the sections available to the role")]
    Sections,

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Inspect the mock data catalog")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Print the config file location")]
    Path,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    #[command(about = "Print the catalog as JSON")]
    Dump,

    #[command(about = "Report duplicate keys and dangling references")]
    Check {
        #[arg(long, help = "Catalog file to check (defaults to --catalog or the builtin data)")]
        file: Option<PathBuf>,
    },
}
