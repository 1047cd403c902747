use serde::{Deserialize, Serialize};

use super::Severity;

/// The strategy initiative traced on the Strategy Trace page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyContext {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub status: String,
    pub alignment_score: u8,
    pub last_updated: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Strategic,
    Drift,
    Ops,
}

/// One slice of a department's capacity bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSegment {
    pub kind: SegmentKind,
    pub label: String,
    /// Share of capacity in percent. Not validated against the other segments.
    pub percent: u8,
    /// Key into the drift detail table, present on drift segments only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_key: Option<String>,
}

impl TraceSegment {
    pub fn is_drift(&self) -> bool {
        self.drift_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentTrace {
    pub id: String,
    pub name: String,
    pub total_capacity: String,
    pub segments: Vec<TraceSegment>,
}

/// Detail card for a drift segment, keyed by `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftDetail {
    pub key: String,
    pub title: String,
    pub department: String,
    pub impact: String,
    pub severity: Severity,
    pub observation: String,
    pub evidence: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapSegment {
    pub kind: SegmentKind,
    pub label: String,
    pub percent: u8,
}

/// Plan vs. observed capacity bars on the System Status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityGap {
    pub planned: Vec<GapSegment>,
    pub observed: Vec<GapSegment>,
    pub status: String,
    /// Text revealed by the hover panel over the drift slice.
    pub explanation: String,
}
