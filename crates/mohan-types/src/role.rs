use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which side of the dashboard is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Manager,
    Employee,
}

const MANAGER_SECTIONS: &[Section] = &[
    Section::SystemStatus,
    Section::StrategyTrace,
    Section::WorkflowTraces,
    Section::TeamPulse,
    Section::Settings,
];

const EMPLOYEE_SECTIONS: &[Section] = &[
    Section::MyFocus,
    Section::MemoryRecall,
    Section::StandupReport,
    Section::Settings,
];

impl Role {
    pub const ALL: [Role; 2] = [Role::Manager, Role::Employee];

    /// Sections reachable from the sidebar for this role, in display order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Role::Manager => MANAGER_SECTIONS,
            Role::Employee => EMPLOYEE_SECTIONS,
        }
    }

    /// Section shown right after switching into this role.
    pub fn home_section(self) -> Section {
        self.sections()[0]
    }

    pub fn has_section(self, section: Section) -> bool {
        self.sections().contains(&section)
    }

    pub fn other(self) -> Role {
        match self {
            Role::Manager => Role::Employee,
            Role::Employee => Role::Manager,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            _ => Err(Error::UnknownVariant {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

/// Top-level dashboard section (sidebar entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    SystemStatus,
    StrategyTrace,
    WorkflowTraces,
    TeamPulse,
    MyFocus,
    MemoryRecall,
    StandupReport,
    Settings,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::SystemStatus => "System Status",
            Section::StrategyTrace => "Strategy Trace",
            Section::WorkflowTraces => "Workflow Traces",
            Section::TeamPulse => "Team Pulse",
            Section::MyFocus => "My Focus",
            Section::MemoryRecall => "Memory Recall",
            Section::StandupReport => "Standup Report",
            Section::Settings => "Settings",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::SystemStatus => "system-status",
            Section::StrategyTrace => "strategy-trace",
            Section::WorkflowTraces => "workflow-traces",
            Section::TeamPulse => "team-pulse",
            Section::MyFocus => "my-focus",
            Section::MemoryRecall => "memory-recall",
            Section::StandupReport => "standup-report",
            Section::Settings => "settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = Error;

    /// Accepts the slug (`strategy-trace`), snake case or the display title.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        const ALL: [Section; 8] = [
            Section::SystemStatus,
            Section::StrategyTrace,
            Section::WorkflowTraces,
            Section::TeamPulse,
            Section::MyFocus,
            Section::MemoryRecall,
            Section::StandupReport,
            Section::Settings,
        ];
        ALL.into_iter()
            .find(|section| section.slug() == normalized)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "section",
                value: s.to_string(),
            })
    }
}

/// Tag passed alongside an assistant submission that picks the canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Recall lookup over the memory feed (employee default).
    #[default]
    MemoryLookup,
    /// Daily standup report draft.
    Report,
}

impl Scenario {
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::MemoryLookup => "memory",
            Scenario::Report => "report",
        }
    }

    pub fn toggled(self) -> Scenario {
        match self {
            Scenario::MemoryLookup => Scenario::Report,
            Scenario::Report => Scenario::MemoryLookup,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "memory-lookup" | "memory_lookup" => Ok(Scenario::MemoryLookup),
            "report" => Ok(Scenario::Report),
            _ => Err(Error::UnknownVariant {
                kind: "scenario",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_ends_with_settings() {
        for role in Role::ALL {
            assert_eq!(role.sections().last(), Some(&Section::Settings));
        }
    }

    #[test]
    fn test_home_sections() {
        assert_eq!(Role::Manager.home_section(), Section::SystemStatus);
        assert_eq!(Role::Employee.home_section(), Section::MyFocus);
    }

    #[test]
    fn test_section_parsing_accepts_titles_and_slugs() {
        assert_eq!(
            "Strategy Trace".parse::<Section>().unwrap(),
            Section::StrategyTrace
        );
        assert_eq!(
            "memory_recall".parse::<Section>().unwrap(),
            Section::MemoryRecall
        );
        assert_eq!(
            "team-pulse".parse::<Section>().unwrap(),
            Section::TeamPulse
        );
        assert!("billing".parse::<Section>().is_err());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!(" employee ".parse::<Role>().unwrap(), Role::Employee);
        let err = "ceo".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown role: 'ceo'");
    }

    #[test]
    fn test_scenario_toggle() {
        assert_eq!(Scenario::default().toggled(), Scenario::Report);
        assert_eq!(Scenario::Report.toggled(), Scenario::MemoryLookup);
    }
}
