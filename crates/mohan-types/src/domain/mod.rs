//! Static dashboard records.
//!
//! Everything here is read-only mock data. Runtime state layered on top of
//! these records lives in `mohan-engine`.

mod memory;
mod metrics;
mod strategy;
mod team;
mod workflow;

pub use memory::{MemoryCategory, MemoryItem, MemoryTab};
pub use metrics::{MetricCard, RiskLevel, RiskSignal};
pub use strategy::{
    CapacityGap, DepartmentTrace, DriftDetail, GapSegment, SegmentKind, StrategyContext,
    TraceSegment,
};
pub use team::{DepartmentComposition, InsightKind, TeamInsight};
pub use workflow::{StageKind, WorkflowInsight, WorkflowLog, WorkflowStage, WorkflowTrace};

use serde::{Deserialize, Serialize};

/// Icon reference stored in data.
///
/// The renderer decides what a kind looks like; records never carry a
/// rendering-framework handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Clock,
    Target,
    AlertTriangle,
    Eye,
    Activity,
    Layers,
    Zap,
    Brain,
    FileText,
    MonitorX,
    Users,
    Search,
}

/// Three-step severity used by drift details, workflow insights and team insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

/// Signed-in user shown in the sidebar profile block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role_label: String,
    pub avatar_initials: String,
    pub org: String,
}
