use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use mohan_engine::{Action, CannedResponder};
use mohan_runtime::DashboardRuntime;
use tracing::info;

use crate::context::AppContext;
use crate::presentation::TuiRenderer;

pub fn handle(ctx: &AppContext) -> Result<()> {
    // Timer tasks keep running on worker threads while the UI blocks on input.
    let executor = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;
    let _enter = executor.enter();

    let provider = Arc::new(CannedResponder::new(
        ctx.catalog.canned.clone(),
        ctx.config.assistant.reply_delay(),
    ));
    let mut runtime = DashboardRuntime::new(ctx.catalog.clone(), ctx.dashboard_options(), provider)?;

    info!(role = %ctx.role, catalog = %ctx.catalog_source, "opening dashboard");
    runtime.dispatch(Action::Mount);

    let tick_rate = Duration::from_millis(ctx.config.ui.tick_rate_ms);
    TuiRenderer::new(tick_rate).run(&mut runtime)
}
