use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    Code,
    Meeting,
    Docs,
    Chat,
}

impl MemoryCategory {
    pub const ALL: [MemoryCategory; 4] = [
        MemoryCategory::Code,
        MemoryCategory::Meeting,
        MemoryCategory::Docs,
        MemoryCategory::Chat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MemoryCategory::Code => "Code",
            MemoryCategory::Meeting => "Meetings",
            MemoryCategory::Docs => "Docs",
            MemoryCategory::Chat => "Chat",
        }
    }
}

/// Tab of the recall feed: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemoryTab {
    #[default]
    All,
    Category(MemoryCategory),
}

impl MemoryTab {
    /// Tabs in display order.
    pub fn all_tabs() -> Vec<MemoryTab> {
        std::iter::once(MemoryTab::All)
            .chain(MemoryCategory::ALL.into_iter().map(MemoryTab::Category))
            .collect()
    }

    pub fn matches(self, category: MemoryCategory) -> bool {
        match self {
            MemoryTab::All => true,
            MemoryTab::Category(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemoryTab::All => "All",
            MemoryTab::Category(c) => c.label(),
        }
    }
}

impl fmt::Display for MemoryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entry of the employee "recall" feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryItem {
    pub id: u32,
    pub category: MemoryCategory,
    pub app: String,
    pub timestamp: String,
    pub title: String,
    pub context: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub related_to: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tabs_starts_with_all() {
        let tabs = MemoryTab::all_tabs();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0], MemoryTab::All);
        assert_eq!(tabs[1], MemoryTab::Category(MemoryCategory::Code));
    }

    #[test]
    fn test_tab_matches() {
        assert!(MemoryTab::All.matches(MemoryCategory::Chat));
        assert!(MemoryTab::Category(MemoryCategory::Docs).matches(MemoryCategory::Docs));
        assert!(!MemoryTab::Category(MemoryCategory::Docs).matches(MemoryCategory::Code));
    }
}
