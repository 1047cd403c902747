use mohan_types::{MemoryTab, Role};
use serde::Serialize;

use crate::Catalog;

/// "Currently focused row" pointers. Each is a key into a catalog table.
///
/// Keys are stored as given; whether they resolve is checked at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SelectionState {
    pub drift: Option<String>,
    pub trace: Option<String>,
    pub stage: Option<String>,
    /// `None` shows every department.
    pub department: Option<String>,
    pub memory_tab: MemoryTab,
    pub risk: usize,
}

impl SelectionState {
    /// Defaults for a freshly entered role. Employee pages never read the
    /// manager tables, so those pointers stay empty.
    pub fn for_role(role: Role, catalog: &Catalog) -> Self {
        match role {
            Role::Manager => {
                let trace = catalog.workflows.first();
                Self {
                    drift: catalog.drift_keys().first().map(|k| k.to_string()),
                    trace: trace.map(|t| t.id.clone()),
                    stage: trace.and_then(|t| t.default_stage()).map(|s| s.id.clone()),
                    department: catalog.department_names().first().map(|d| d.to_string()),
                    memory_tab: MemoryTab::All,
                    risk: 0,
                }
            }
            Role::Employee => Self::default(),
        }
    }

    pub fn select_trace(&mut self, id: &str, catalog: &Catalog) {
        self.trace = Some(id.to_string());
        self.stage = catalog
            .workflow(id)
            .and_then(|t| t.default_stage())
            .map(|s| s.id.clone());
    }
}

/// Move through `keys` relative to `current`, wrapping at both ends.
/// An unknown or missing `current` starts from the first key.
pub(crate) fn cycle_key<'a>(keys: &[&'a str], current: Option<&str>, forward: bool) -> Option<&'a str> {
    if keys.is_empty() {
        return None;
    }
    let len = keys.len();
    let next = match current.and_then(|c| keys.iter().position(|k| *k == c)) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None => 0,
    };
    Some(keys[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_defaults_follow_catalog() {
        let catalog = Catalog::builtin();
        let sel = SelectionState::for_role(Role::Manager, &catalog);
        assert_eq!(sel.drift.as_deref(), Some("eng_drift"));
        assert_eq!(sel.trace.as_deref(), Some("wf-ticket-merge"));
        assert_eq!(sel.stage.as_deref(), Some("s4"));
        assert_eq!(sel.department.as_deref(), Some("Engineering"));
    }

    #[test]
    fn test_employee_defaults_are_empty() {
        let catalog = Catalog::builtin();
        let sel = SelectionState::for_role(Role::Employee, &catalog);
        assert_eq!(sel, SelectionState::default());
    }

    #[test]
    fn test_select_trace_moves_stage() {
        let catalog = Catalog::builtin();
        let mut sel = SelectionState::for_role(Role::Manager, &catalog);
        sel.select_trace("wf-lead-contract", &catalog);
        assert_eq!(sel.stage.as_deref(), Some("l2"));

        sel.select_trace("wf-unknown", &catalog);
        assert_eq!(sel.trace.as_deref(), Some("wf-unknown"));
        assert_eq!(sel.stage, None);
    }

    #[test]
    fn test_cycle_key_wraps() {
        let keys = ["a", "b", "c"];
        assert_eq!(cycle_key(&keys, Some("c"), true), Some("a"));
        assert_eq!(cycle_key(&keys, Some("a"), false), Some("c"));
        assert_eq!(cycle_key(&keys, Some("zzz"), true), Some("a"));
        assert_eq!(cycle_key(&[], None, true), None);
    }
}
