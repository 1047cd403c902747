use std::sync::Arc;

use anyhow::{Result, bail};
use mohan_engine::{Action, CannedResponder, ResponseProvider};
use mohan_runtime::DashboardRuntime;
use mohan_types::{ChatMessage, Scenario, Sender};

use crate::context::AppContext;
use crate::presentation::presenters::present_ask;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(
    ctx: &AppContext,
    text: String,
    scenario: Option<Scenario>,
    no_delay: bool,
    json: bool,
) -> Result<()> {
    if text.trim().is_empty() {
        bail!("question is empty");
    }

    let provider: Arc<dyn ResponseProvider> = if no_delay {
        Arc::new(CannedResponder::instant(ctx.catalog.canned.clone()))
    } else {
        Arc::new(CannedResponder::new(
            ctx.catalog.canned.clone(),
            ctx.config.assistant.reply_delay(),
        ))
    };

    let executor = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut options = ctx.dashboard_options();
    options.animation = None;

    let (question, reply) = executor.block_on(async {
        let mut runtime = DashboardRuntime::new(ctx.catalog.clone(), options, provider)?;
        runtime.dispatch(Action::Mount);
        runtime.dispatch(Action::Submit { text, scenario });
        runtime.settle().await;

        let messages = &runtime.state().assistant.messages;
        let last = |sender: Sender| -> Option<ChatMessage> {
            messages.iter().rev().find(|m| m.sender == sender).cloned()
        };
        anyhow::Ok((last(Sender::User), last(Sender::Assistant)))
    })?;

    let (Some(question), Some(reply)) = (question, reply) else {
        bail!("the assistant did not reply");
    };

    ConsoleRenderer::new(json).render(present_ask(ctx.role, scenario, &question, &reply))
}
