use anyhow::{Result, bail};
use std::path::Path;

use crate::context::{AppContext, load_catalog};
use crate::presentation::presenters::present_catalog_check;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn dump(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.catalog)?);
    Ok(())
}

/// Exits non-zero when the catalog has issues, so it can gate CI.
pub fn check(ctx: &AppContext, file: Option<&Path>, json: bool) -> Result<()> {
    let loaded;
    let (catalog, source) = match file {
        Some(path) => {
            loaded = load_catalog(Some(path))?;
            (&loaded.0, loaded.1.as_str())
        }
        None => (&ctx.catalog, ctx.catalog_source.as_str()),
    };

    let result = present_catalog_check(source, catalog);
    let issues = result.content.issues.len();
    ConsoleRenderer::new(json).render(result)?;

    if issues > 0 {
        bail!("catalog has {} issue(s)", issues);
    }
    Ok(())
}
