//! Static lookup tables backing every dashboard page.
//!
//! Lookups never fail loudly: an unknown key yields `None` and the caller
//! renders its placeholder state.

mod builtin;

use mohan_types::{
    CannedReply, CapacityGap, DepartmentComposition, DepartmentTrace, DriftDetail, MemoryItem,
    MetricCard, RiskSignal, Role, StrategyContext, TeamInsight, UserProfile, WorkflowInsight,
    WorkflowTrace,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Fixed payloads returned by the simulated assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannedReplies {
    pub drift_alert: CannedReply,
    pub standup: CannedReply,
    pub memory_lookup: CannedReply,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: UserProfile,
    /// Suggested question filled into an empty assistant input.
    pub default_question: String,
    pub manager_metrics: Vec<MetricCard>,
    pub employee_metrics: Vec<MetricCard>,
    pub risks: Vec<RiskSignal>,
    pub capacity_gap: CapacityGap,
    pub strategy: StrategyContext,
    pub departments: Vec<DepartmentTrace>,
    pub drifts: Vec<DriftDetail>,
    pub workflows: Vec<WorkflowTrace>,
    pub workflow_insights: Vec<WorkflowInsight>,
    pub compositions: Vec<DepartmentComposition>,
    pub team_insights: Vec<TeamInsight>,
    pub memories: Vec<MemoryItem>,
    pub canned: CannedReplies,
}

impl Catalog {
    /// The compiled-in demo dataset.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn from_json_str(json: &str) -> mohan_types::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> mohan_types::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn metrics_for(&self, role: Role) -> &[MetricCard] {
        match role {
            Role::Manager => &self.manager_metrics,
            Role::Employee => &self.employee_metrics,
        }
    }

    pub fn drift(&self, key: &str) -> Option<&DriftDetail> {
        self.drifts.iter().find(|d| d.key == key)
    }

    pub fn workflow(&self, id: &str) -> Option<&WorkflowTrace> {
        self.workflows.iter().find(|w| w.id == id)
    }

    pub fn workflow_insight(&self, key: &str) -> Option<&WorkflowInsight> {
        self.workflow_insights.iter().find(|i| i.key == key)
    }

    pub fn composition(&self, department: &str) -> Option<&DepartmentComposition> {
        self.compositions.iter().find(|c| c.name == department)
    }

    pub fn memory(&self, id: u32) -> Option<&MemoryItem> {
        self.memories.iter().find(|m| m.id == id)
    }

    pub fn department_names(&self) -> Vec<&str> {
        self.compositions.iter().map(|c| c.name.as_str()).collect()
    }

    /// Drift keys in the order their segments appear on the Strategy Trace page.
    pub fn drift_keys(&self) -> Vec<&str> {
        self.departments
            .iter()
            .flat_map(|dept| dept.segments.iter())
            .filter_map(|seg| seg.drift_key.as_deref())
            .collect()
    }

    /// Report duplicate keys and references that point nowhere.
    ///
    /// Percentages are intentionally left alone; they are illustrative.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        check_unique(&mut issues, "drift", self.drifts.iter().map(|d| d.key.as_str()));
        check_unique(&mut issues, "workflow", self.workflows.iter().map(|w| w.id.as_str()));
        check_unique(
            &mut issues,
            "workflow insight",
            self.workflow_insights.iter().map(|i| i.key.as_str()),
        );
        check_unique(
            &mut issues,
            "department",
            self.compositions.iter().map(|c| c.name.as_str()),
        );
        let memory_ids: Vec<String> = self.memories.iter().map(|m| m.id.to_string()).collect();
        check_unique(&mut issues, "memory", memory_ids.iter().map(String::as_str));

        let drift_refs = self
            .departments
            .iter()
            .flat_map(|d| d.segments.iter())
            .chain(self.workflows.iter().flat_map(|w| w.segments.iter()))
            .filter_map(|seg| seg.drift_key.as_deref());
        for key in drift_refs {
            if self.drift(key).is_none() {
                issues.push(CatalogIssue::DanglingReference {
                    table: "drift",
                    key: key.to_string(),
                });
            }
        }

        for workflow in &self.workflows {
            check_unique(
                &mut issues,
                "workflow stage",
                workflow.stages.iter().map(|s| s.id.as_str()),
            );
            for key in workflow.stages.iter().filter_map(|s| s.insight_key.as_deref()) {
                if self.workflow_insight(key).is_none() {
                    issues.push(CatalogIssue::DanglingReference {
                        table: "workflow insight",
                        key: key.to_string(),
                    });
                }
            }
        }

        for insight in &self.team_insights {
            if self.composition(&insight.department).is_none() {
                issues.push(CatalogIssue::DanglingReference {
                    table: "department",
                    key: insight.department.clone(),
                });
            }
        }

        issues
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_unique<'a>(
    issues: &mut Vec<CatalogIssue>,
    table: &'static str,
    keys: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            issues.push(CatalogIssue::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
}

/// Problem found by [`Catalog::validate`]. Issues are warnings; the catalog stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateKey { table: &'static str, key: String },
    DanglingReference { table: &'static str, key: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateKey { table, key } => {
                write!(f, "duplicate {} key '{}'", table, key)
            }
            CatalogIssue::DanglingReference { table, key } => {
                write!(f, "reference to unknown {} '{}'", table, key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin();
        let issues = catalog.validate();
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_builtin_matches_original_tables() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.manager_metrics.len(), 3);
        assert_eq!(catalog.manager_metrics[0].value, "14.2 Days");
        assert_eq!(catalog.risks.len(), 3);
        assert_eq!(catalog.drift_keys(), vec!["eng_drift", "sales_drift"]);
        assert_eq!(catalog.strategy.alignment_score, 42);
    }

    #[test]
    fn test_lookup_unknown_keys_returns_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.drift("nope").is_none());
        assert!(catalog.workflow("wf-missing").is_none());
        assert!(catalog.workflow_insight("").is_none());
        assert!(catalog.composition("Legal").is_none());
        assert!(catalog.memory(999).is_none());
    }

    #[test]
    fn test_validate_reports_dangling_and_duplicates() {
        let mut catalog = Catalog::builtin();
        catalog.departments[0].segments[1].drift_key = Some("ghost".to_string());
        let dup = catalog.drifts[0].clone();
        catalog.drifts.push(dup);

        let issues = catalog.validate();
        assert!(issues.contains(&CatalogIssue::DuplicateKey {
            table: "drift",
            key: "eng_drift".to_string()
        }));
        assert!(issues.contains(&CatalogIssue::DanglingReference {
            table: "drift",
            key: "ghost".to_string()
        }));
    }

    #[test]
    fn test_percentages_are_not_validated() {
        let mut catalog = Catalog::builtin();
        catalog.compositions[0].focus = 90;
        catalog.compositions[0].friction = 90;
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let catalog = Catalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = Catalog::from_json_file(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Catalog::from_json_str("{\"profile\": 1}").unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
