//! Executes the reducer's commands on tokio timers.
//!
//! The runtime is the only writer of the dashboard state. Timer tasks hold a
//! sender and nothing else; whatever they produce comes back as an [`Action`]
//! and is applied on the owner's thread by [`DashboardRuntime::drain`] or
//! [`DashboardRuntime::next`].

use mohan_engine::{
    Action, AnimationPlan, AssistantRequest, Catalog, Command, Dashboard, DashboardOptions,
    DashboardState, ResponseProvider,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::{Error, Result};

const SETTLE_POLL: Duration = Duration::from_millis(10);

pub struct DashboardRuntime {
    dashboard: Dashboard,
    provider: Arc<dyn ResponseProvider>,
    handle: Handle,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    animations: Vec<JoinHandle<()>>,
    replies: Vec<JoinHandle<()>>,
}

impl DashboardRuntime {
    /// Must be called from within a tokio runtime context.
    pub fn new(
        catalog: Catalog,
        options: DashboardOptions,
        provider: Arc<dyn ResponseProvider>,
    ) -> Result<Self> {
        let handle = Handle::try_current().map_err(|e| Error::NoExecutor(e.to_string()))?;
        let (tx, rx) = unbounded_channel();
        Ok(Self {
            dashboard: Dashboard::new(catalog, options),
            provider,
            handle,
            tx,
            rx,
            animations: Vec::new(),
            replies: Vec::new(),
        })
    }

    pub fn state(&self) -> &DashboardState {
        self.dashboard.state()
    }

    pub fn catalog(&self) -> &Catalog {
        self.dashboard.catalog()
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Apply one action and run the effects it requests.
    pub fn dispatch(&mut self, action: Action) {
        let commands = self.dashboard.update(action);
        for command in commands {
            self.execute(command);
        }
    }

    /// Apply every action the timers have posted so far. Never blocks.
    /// Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next timer-posted action and apply it.
    pub async fn next(&mut self) -> Option<()> {
        let action = self.rx.recv().await?;
        self.dispatch(action);
        Some(())
    }

    /// Whether any timer task is still running.
    pub fn has_pending_effects(&self) -> bool {
        self.animations
            .iter()
            .chain(self.replies.iter())
            .any(|task| !task.is_finished())
    }

    /// Run timer-posted actions until no task is left running.
    pub async fn settle(&mut self) {
        while self.has_pending_effects() || !self.rx.is_empty() {
            match tokio::time::timeout(SETTLE_POLL, self.rx.recv()).await {
                Ok(Some(action)) => self.dispatch(action),
                Ok(None) => break,
                // A task may finish without posting anything; re-check.
                Err(_) => {}
            }
        }
    }

    pub fn unmount(&mut self) {
        self.dispatch(Action::Unmount);
        self.abort_animations();
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::StartAnimation { generation, plans } => {
                self.abort_animations();
                for plan in plans {
                    let task = self.handle.spawn(play(plan, generation, self.tx.clone()));
                    self.animations.push(task);
                }
            }
            Command::CancelAnimation => self.abort_animations(),
            Command::ScheduleReply(request) => {
                self.replies.retain(|task| !task.is_finished());
                let task = self.handle.spawn(reply(
                    request,
                    Arc::clone(&self.provider),
                    self.tx.clone(),
                ));
                self.replies.push(task);
            }
        }
    }

    fn abort_animations(&mut self) {
        if self.animations.is_empty() {
            return;
        }
        debug!(tasks = self.animations.len(), "aborting metric animation");
        for task in self.animations.drain(..) {
            task.abort();
        }
    }
}

impl Drop for DashboardRuntime {
    fn drop(&mut self) {
        self.abort_animations();
        for task in self.replies.drain(..) {
            task.abort();
        }
    }
}

async fn play(plan: AnimationPlan, generation: u64, tx: UnboundedSender<Action>) {
    for frame in plan.frames {
        tokio::time::sleep(frame.delay).await;
        let action = Action::MetricFrame {
            generation,
            slot: plan.slot,
            text: frame.text,
        };
        if tx.send(action).is_err() {
            return;
        }
    }
    trace!(slot = plan.slot, generation, "animation finished");
}

async fn reply(
    request: AssistantRequest,
    provider: Arc<dyn ResponseProvider>,
    tx: UnboundedSender<Action>,
) {
    tokio::time::sleep(provider.delay(&request)).await;
    let reply = provider.respond(&request);
    let _ = tx.send(Action::ReplyReady {
        ticket: request.ticket,
        reply,
    });
}
