//! List filters used by the recall feed, workflow logs and team insights.
//!
//! All filters are case-insensitive substring matches. An empty (or
//! whitespace-only) query keeps every item, and filtering a filtered list
//! again with the same query is a no-op.

use mohan_types::{MemoryItem, MemoryTab, TeamInsight, WorkflowLog};

/// Normalized search text. Empty means "match everything".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    fn matches_any<'a>(&self, mut fields: impl Iterator<Item = &'a str>) -> bool {
        self.is_empty() || fields.any(|field| self.matches(field))
    }
}

pub fn filter_memories<'a>(
    items: impl IntoIterator<Item = &'a MemoryItem>,
    tab: MemoryTab,
    query: &str,
) -> Vec<&'a MemoryItem> {
    let query = Query::new(query);
    items
        .into_iter()
        .filter(|item| tab.matches(item.category))
        .filter(|item| {
            let fields = [item.title.as_str(), item.context.as_str(), item.app.as_str()]
                .into_iter()
                .chain(item.keywords.iter().map(String::as_str));
            query.matches_any(fields)
        })
        .collect()
}

pub fn filter_logs<'a>(
    logs: impl IntoIterator<Item = &'a WorkflowLog>,
    query: &str,
) -> Vec<&'a WorkflowLog> {
    let query = Query::new(query);
    logs.into_iter()
        .filter(|log| query.matches_any([log.app.as_str(), log.message.as_str()].into_iter()))
        .collect()
}

/// Team insights for one department; `None` keeps all departments.
pub fn filter_team_insights<'a>(
    insights: impl IntoIterator<Item = &'a TeamInsight>,
    department: Option<&str>,
) -> Vec<&'a TeamInsight> {
    insights
        .into_iter()
        .filter(|insight| department.is_none_or(|d| insight.department == d))
        .collect()
}
