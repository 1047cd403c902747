use super::args::{CatalogCommand, Cli, Commands, ConfigCommand, OutputFormat};
use super::context::{AppContext, resolve_config_path};
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let json = cli.format == OutputFormat::Json;
    let command = cli.command.unwrap_or(Commands::Tui);

    // Init and path only need the location, so a broken file can be replaced.
    if let Commands::Config {
        command: ConfigCommand::Init { .. } | ConfigCommand::Path,
    } = &command
    {
        let level = cli.log_level.map_or_else(|| "info".to_string(), |l| l.to_string());
        let _guard = logging::init(&level, LogTarget::Stderr);
        let config_path = resolve_config_path(cli.config.as_deref())?;
        return match command {
            Commands::Config {
                command: ConfigCommand::Init { force },
            } => handlers::config::init(&config_path, force, json),
            _ => handlers::config::path(&config_path, json),
        };
    }

    let ctx = AppContext::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        cli.role,
        cli.no_animation,
    )?;
    let level = cli
        .log_level
        .map(|l| l.to_string())
        .unwrap_or_else(|| ctx.config.logging.level.clone());

    // The UI owns the terminal, so its logs go to the configured file.
    let target = match command {
        Commands::Tui => LogTarget::File(ctx.config.logging.file.as_deref()),
        _ => LogTarget::Stderr,
    };
    let _guard = logging::init(&level, target);

    match command {
        Commands::Tui => handlers::tui::handle(&ctx),

        Commands::Snapshot {
            section,
            drift,
            trace,
            stage,
            department,
            tab,
            search,
            panels,
        } => handlers::snapshot::handle(
            &ctx,
            handlers::snapshot::SnapshotRequest {
                section,
                drift,
                trace,
                stage,
                department,
                tab,
                search,
                panels: panels.into_iter().map(Into::into).collect(),
            },
            json,
        ),

        Commands::Ask {
            text,
            scenario,
            no_delay,
        } => handlers::ask::handle(&ctx, text, scenario.map(Into::into), no_delay, json),

        Commands::Sections => handlers::sections::handle(ctx.role, json),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, json),
            ConfigCommand::Init { force } => handlers::config::init(&ctx.config_path, force, json),
            ConfigCommand::Path => handlers::config::path(&ctx.config_path, json),
        },

        Commands::Catalog { command } => match command {
            CatalogCommand::Dump => handlers::catalog::dump(&ctx),
            CatalogCommand::Check { file } => handlers::catalog::check(&ctx, file.as_deref(), json),
        },
    }
}
