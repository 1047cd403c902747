use anyhow::{Context as _, Result};
use mohan_engine::{Catalog, DashboardOptions};
use mohan_runtime::Config;
use mohan_types::Role;
use std::path::{Path, PathBuf};

/// Configuration and data shared by every command.
pub struct AppContext {
    pub config_path: PathBuf,
    pub config: Config,
    pub catalog: Catalog,
    /// Where the catalog came from, for messages.
    pub catalog_source: String,
    pub role: Role,
    pub animation: bool,
}

impl AppContext {
    pub fn load(
        config_path: Option<&Path>,
        catalog_path: Option<&Path>,
        role: Option<Role>,
        no_animation: bool,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let config = Config::load_from(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;

        let (catalog, catalog_source) = load_catalog(catalog_path)?;

        Ok(Self {
            role: role.unwrap_or(config.dashboard.default_role),
            animation: config.animation.enabled && !no_animation,
            config_path,
            config,
            catalog,
            catalog_source,
        })
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        let mut options = self.config.dashboard_options();
        options.role = self.role;
        if !self.animation {
            options.animation = None;
        }
        options
    }
}

/// `--config` if given, otherwise `config.toml` in the data directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::default_path()?),
    }
}

pub fn load_catalog(path: Option<&Path>) -> Result<(Catalog, String)> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            Ok((catalog, path.display().to_string()))
        }
        None => Ok((Catalog::builtin(), "builtin".to_string())),
    }
}
