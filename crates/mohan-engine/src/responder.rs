//! Reply strategies for the simulated assistant.
//!
//! Nothing here performs inference. A provider maps `(role, scenario)` to a
//! fixed payload and tells the runtime how long to pretend to think.

use mohan_types::{CannedReply, Role, Scenario};
use std::time::Duration;

use crate::catalog::CannedReplies;

/// One accepted submission waiting for its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantRequest {
    pub ticket: u64,
    pub role: Role,
    pub scenario: Option<Scenario>,
    pub prompt: String,
}

pub trait ResponseProvider: Send + Sync {
    fn delay(&self, request: &AssistantRequest) -> Duration;
    fn respond(&self, request: &AssistantRequest) -> CannedReply;
}

/// Picks the payload for a request. The prompt text is never consulted.
pub fn select_canned(replies: &CannedReplies, role: Role, scenario: Option<Scenario>) -> &CannedReply {
    match (role, scenario) {
        (Role::Manager, _) => &replies.drift_alert,
        (Role::Employee, Some(Scenario::Report)) => &replies.standup,
        (Role::Employee, Some(Scenario::MemoryLookup) | None) => &replies.memory_lookup,
    }
}

/// Catalog-backed provider with a fixed thinking delay.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    replies: CannedReplies,
    delay: Duration,
}

impl CannedResponder {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(replies: CannedReplies, delay: Duration) -> Self {
        Self { replies, delay }
    }

    /// Same payloads, no waiting. Used by tests and `--no-delay` runs.
    pub fn instant(replies: CannedReplies) -> Self {
        Self::new(replies, Duration::ZERO)
    }
}

impl ResponseProvider for CannedResponder {
    fn delay(&self, _request: &AssistantRequest) -> Duration {
        self.delay
    }

    fn respond(&self, request: &AssistantRequest) -> CannedReply {
        select_canned(&self.replies, request.role, request.scenario).clone()
    }
}
