use serde::{Deserialize, Serialize};

use super::IconKind;

/// Headline number card at the top of a status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    /// Display string, e.g. `"14.2 Days"`. The leading number is animated on mount.
    pub value: String,
    /// Caption under the value describing where the number comes from.
    pub sub: String,
    pub trend: String,
    pub is_good: bool,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    Warning,
    Info,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::Warning => "Warning",
            RiskLevel::Info => "Info",
        }
    }
}

/// Entry of the live signals list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSignal {
    pub id: u32,
    pub title: String,
    pub evidence: String,
    pub level: RiskLevel,
}
