use serde::{Deserialize, Serialize};

use super::Severity;

/// Focus / collaboration / friction split for one department.
///
/// Percentages are author-supplied and are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentComposition {
    pub name: String,
    pub focus: u8,
    pub collab: u8,
    pub friction: u8,
    pub members: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Burnout,
    Bottleneck,
    Collaboration,
    Focus,
}

impl InsightKind {
    pub fn label(self) -> &'static str {
        match self {
            InsightKind::Burnout => "Burnout",
            InsightKind::Bottleneck => "Bottleneck",
            InsightKind::Collaboration => "Collaboration",
            InsightKind::Focus => "Focus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInsight {
    pub id: u32,
    pub department: String,
    pub kind: InsightKind,
    pub severity: Severity,
    pub title: String,
    pub content: String,
    pub action: String,
}
