use anyhow::{Context as _, Result, bail};
use mohan_runtime::Config;
use std::path::Path;

use crate::context::AppContext;
use crate::presentation::presenters::{present_config, present_config_init, present_config_path};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn show(ctx: &AppContext, json: bool) -> Result<()> {
    let toml = toml::to_string_pretty(&ctx.config)?;
    let result = present_config(&ctx.config_path, ctx.config_path.exists(), toml);
    ConsoleRenderer::new(json).render(result)
}

/// Never reads the existing file, so it also repairs an invalid one.
pub fn init(path: &Path, force: bool, json: bool) -> Result<()> {
    let exists = path.exists();
    if exists && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    ConsoleRenderer::new(json).render(present_config_init(path, exists))
}

pub fn path(path: &Path, json: bool) -> Result<()> {
    ConsoleRenderer::new(json).render(present_config_path(path))
}
