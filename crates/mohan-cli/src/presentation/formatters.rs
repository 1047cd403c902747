//! Small display helpers shared by presenters and views.

use mohan_types::{IconKind, RiskLevel, SegmentKind, Severity, StageKind};

use super::view_models::StatusLevel;

/// Terminal stand-in for each icon.
pub fn icon_glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Clock => "◷",
        IconKind::Target => "◎",
        IconKind::AlertTriangle => "⚠",
        IconKind::Eye => "◉",
        IconKind::Activity => "∿",
        IconKind::Layers => "≡",
        IconKind::Zap => "ϟ",
        IconKind::Brain => "✺",
        IconKind::FileText => "▤",
        IconKind::MonitorX => "▣",
        IconKind::Users => "☷",
        IconKind::Search => "⌕",
    }
}

pub fn segment_kind(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Strategic => "strategic",
        SegmentKind::Drift => "drift",
        SegmentKind::Ops => "ops",
    }
}

pub fn risk_status(level: RiskLevel) -> StatusLevel {
    match level {
        RiskLevel::Critical => StatusLevel::Error,
        RiskLevel::Warning => StatusLevel::Warning,
        RiskLevel::Info => StatusLevel::Info,
    }
}

pub fn severity_status(severity: Severity) -> StatusLevel {
    match severity {
        Severity::High => StatusLevel::Error,
        Severity::Medium => StatusLevel::Warning,
        Severity::Low => StatusLevel::Success,
    }
}

pub fn stage_status(kind: StageKind) -> StatusLevel {
    match kind {
        StageKind::Active => StatusLevel::Success,
        StageKind::Queue => StatusLevel::Warning,
        StageKind::Blocked => StatusLevel::Error,
        StageKind::Pending => StatusLevel::Info,
    }
}

/// Width of the attached terminal, or 80 when output is piped.
pub fn terminal_width() -> usize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), _)) => w as usize,
        None => 80,
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Fill character for a bar segment kind, used by the plain-text views.
pub fn bar_fill(kind: &str) -> char {
    match kind {
        "strategic" => '█',
        "drift" => '▓',
        _ => '░',
    }
}

/// Split `width` cells proportionally to `percents`. Percentages are not
/// normalized, so a row summing past 100 is clipped at `width`.
pub fn bar_widths(percents: &[u8], width: usize) -> Vec<usize> {
    let mut used = 0;
    percents
        .iter()
        .map(|p| {
            let cells = (*p as usize * width + 50) / 100;
            let cells = cells.min(width - used.min(width));
            used += cells;
            cells
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_widths_proportional() {
        assert_eq!(bar_widths(&[30, 50, 20], 40), vec![12, 20, 8]);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Jira Ticket → Git Merge", 40), "Jira Ticket → Git Merge");
        assert_eq!(truncate("Staging Deploy", 8), "Staging…");
    }

    #[test]
    fn test_bar_widths_clip_overflow() {
        assert_eq!(bar_widths(&[80, 80], 10), vec![8, 2]);
        assert_eq!(bar_widths(&[], 10), Vec::<usize>::new());
    }
}
