use clap::ValueEnum;
use mohan_types::{MemoryCategory, MemoryTab};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    Drawer,
    Assistant,
    Profile,
    Explanation,
}

impl From<PanelArg> for mohan_engine::Panel {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Drawer => mohan_engine::Panel::AiDrawer,
            PanelArg::Assistant => mohan_engine::Panel::AssistantWindow,
            PanelArg::Profile => mohan_engine::Panel::ProfileMenu,
            PanelArg::Explanation => mohan_engine::Panel::DriftExplanation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    Memory,
    Report,
}

impl From<ScenarioArg> for mohan_types::Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Memory => mohan_types::Scenario::MemoryLookup,
            ScenarioArg::Report => mohan_types::Scenario::Report,
        }
    }
}

/// Parses `all` or a memory category name (`code`, `meeting`/`meetings`, `docs`, `chat`).
pub fn parse_memory_tab(value: &str) -> Result<MemoryTab, String> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized == "all" {
        return Ok(MemoryTab::All);
    }
    MemoryCategory::ALL
        .into_iter()
        .find(|c| {
            let label = c.label().to_ascii_lowercase();
            label == normalized || label.trim_end_matches('s') == normalized
        })
        .map(MemoryTab::Category)
        .ok_or_else(|| format!("unknown memory tab '{}' (all, code, meetings, docs, chat)", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_tab() {
        assert_eq!(parse_memory_tab("ALL"), Ok(MemoryTab::All));
        assert_eq!(
            parse_memory_tab("meeting"),
            Ok(MemoryTab::Category(MemoryCategory::Meeting))
        );
        assert_eq!(
            parse_memory_tab("Docs"),
            Ok(MemoryTab::Category(MemoryCategory::Docs))
        );
        assert!(parse_memory_tab("email").is_err());
    }
}
