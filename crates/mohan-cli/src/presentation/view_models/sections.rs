use serde::Serialize;

use super::assistant::ReportViewModel;
use super::common::{Lookup, PlaceholderViewModel, StatusLevel};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionViewModel {
    SystemStatus(SystemStatusViewModel),
    StrategyTrace(StrategyTraceViewModel),
    WorkflowTraces(WorkflowTracesViewModel),
    TeamPulse(TeamPulseViewModel),
    MyFocus(MyFocusViewModel),
    MemoryRecall(MemoryRecallViewModel),
    StandupReport(StandupReportViewModel),
    Placeholder(PlaceholderViewModel),
}

// --------------------------------------------------------
// Shared pieces
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MetricCardViewModel {
    pub icon: String,
    pub title: String,
    /// What the card shows right now; empty while waiting for the first frame.
    pub value: String,
    pub target: String,
    pub sub: String,
    pub trend: String,
    pub is_good: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarSegmentViewModel {
    pub label: String,
    pub percent: u8,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_key: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryRowViewModel {
    pub id: u32,
    pub category: String,
    pub app: String,
    pub timestamp: String,
    pub title: String,
    pub context: String,
    pub keywords: Vec<String>,
    pub related_to: Vec<String>,
}

// --------------------------------------------------------
// Manager pages
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SystemStatusViewModel {
    pub metrics: Vec<MetricCardViewModel>,
    pub risks: Vec<RiskViewModel>,
    pub capacity_gap: CapacityGapViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskViewModel {
    pub id: u32,
    pub title: String,
    pub evidence: String,
    pub level: String,
    pub status: StatusLevel,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapacityGapViewModel {
    pub planned: Vec<BarSegmentViewModel>,
    pub observed: Vec<BarSegmentViewModel>,
    pub status: String,
    /// Present while the drift explanation panel is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyTraceViewModel {
    pub strategy: StrategyHeaderViewModel,
    pub departments: Vec<DepartmentTraceViewModel>,
    pub drift: Lookup<DriftDetailViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyHeaderViewModel {
    pub name: String,
    pub owner: String,
    pub status: String,
    pub alignment_score: u8,
    pub last_updated: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentTraceViewModel {
    pub name: String,
    pub total_capacity: String,
    pub segments: Vec<BarSegmentViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriftDetailViewModel {
    pub key: String,
    pub title: String,
    pub department: String,
    pub impact: String,
    pub severity: String,
    pub observation: String,
    pub evidence: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowTracesViewModel {
    pub traces: Vec<TraceTabViewModel>,
    pub trace: Lookup<WorkflowDetailViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceTabViewModel {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowDetailViewModel {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub total_duration: String,
    pub segments: Vec<BarSegmentViewModel>,
    pub stages: Vec<StageViewModel>,
    pub stage: Lookup<StageDetailViewModel>,
    pub log_query: String,
    pub logs: Vec<LogViewModel>,
    pub total_logs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageViewModel {
    pub id: String,
    pub name: String,
    pub tool: String,
    pub duration: String,
    pub kind: String,
    pub status: StatusLevel,
    pub owner: String,
    pub x: u16,
    pub y: u16,
    pub has_insight: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageDetailViewModel {
    pub id: String,
    pub name: String,
    pub tool: String,
    pub duration: String,
    pub kind: String,
    pub owner: String,
    /// `None` when the stage carries no insight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<Lookup<WorkflowInsightViewModel>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowInsightViewModel {
    pub title: String,
    pub severity: String,
    pub impact: String,
    pub root_cause: String,
    pub observation: String,
    pub evidence: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogViewModel {
    pub timestamp: String,
    pub app: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamPulseViewModel {
    pub filters: Vec<FilterChipViewModel>,
    pub compositions: Vec<CompositionViewModel>,
    pub insights: Vec<TeamInsightViewModel>,
    /// Shown instead of the insight list when it is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterChipViewModel {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositionViewModel {
    pub name: String,
    pub focus: u8,
    pub collab: u8,
    pub friction: u8,
    pub members: u32,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamInsightViewModel {
    pub department: String,
    pub kind: String,
    pub severity: String,
    pub status: StatusLevel,
    pub title: String,
    pub content: String,
    pub action: String,
}

// --------------------------------------------------------
// Employee pages
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MyFocusViewModel {
    pub greeting: String,
    pub metrics: Vec<MetricCardViewModel>,
    pub recent: Vec<MemoryRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryRecallViewModel {
    pub tabs: Vec<MemoryTabViewModel>,
    pub query: String,
    pub items: Vec<MemoryRowViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryTabViewModel {
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StandupReportViewModel {
    pub report: Lookup<ReportViewModel>,
    pub hint: String,
}
