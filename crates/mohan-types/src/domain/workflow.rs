use serde::{Deserialize, Serialize};

use super::{Severity, strategy::TraceSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Active,
    Queue,
    Blocked,
    Pending,
}

impl StageKind {
    pub fn label(self) -> &'static str {
        match self {
            StageKind::Active => "active",
            StageKind::Queue => "queue",
            StageKind::Blocked => "blocked",
            StageKind::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStage {
    pub id: String,
    pub name: String,
    pub tool: String,
    pub duration: String,
    pub kind: StageKind,
    pub owner: String,
    /// Layout offsets of the stage node in the flow diagram.
    pub x: u16,
    pub y: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInsight {
    pub key: String,
    pub title: String,
    pub severity: Severity,
    pub impact: String,
    pub root_cause: String,
    pub observation: String,
    pub evidence: Vec<String>,
    pub recommendation: String,
}

/// One screen-activity log line attached to a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowLog {
    pub id: u32,
    pub timestamp: String,
    pub app: String,
    pub message: String,
}

/// A traced end-to-end workflow (ticket to merge, lead to contract, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTrace {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub total_duration: String,
    pub segments: Vec<TraceSegment>,
    pub stages: Vec<WorkflowStage>,
    #[serde(default)]
    pub logs: Vec<WorkflowLog>,
}

impl WorkflowTrace {
    pub fn stage(&self, id: &str) -> Option<&WorkflowStage> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    /// Stage focused when the trace is first opened: the one carrying an
    /// insight, otherwise the first stage.
    pub fn default_stage(&self) -> Option<&WorkflowStage> {
        self.stages
            .iter()
            .find(|stage| stage.insight_key.is_some())
            .or_else(|| self.stages.first())
    }
}
