//! TUI View Components
//!
//! Ratatui widgets for the interactive dashboard. Each one wraps a borrowed
//! view model and maps it onto widgets; no state is read from the engine.

pub mod assistant;
pub mod header;
pub mod overlays;
pub mod section;
pub mod status_bar;

pub use assistant::AssistantView;
pub use header::{HeaderView, NavigationView};
pub use overlays::{DrawerView, ProfileMenuView};
pub use section::SectionView;
pub use status_bar::StatusBarView;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};

use crate::presentation::formatters::bar_widths;
use crate::presentation::view_models::{BarSegmentViewModel, StatusLevel};

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn segment_color(kind: &str) -> Color {
    match kind {
        "strategic" => Color::Blue,
        "drift" => Color::Red,
        _ => Color::DarkGray,
    }
}

/// One colored bar row, `width` cells wide.
pub(crate) fn bar_line(segments: &[BarSegmentViewModel], width: usize) -> Line<'static> {
    use ratatui::style::{Modifier, Style};

    let percents: Vec<u8> = segments.iter().map(|s| s.percent).collect();
    let spans: Vec<Span<'static>> = segments
        .iter()
        .zip(bar_widths(&percents, width))
        .map(|(seg, cells)| {
            let mut style = Style::default().bg(segment_color(&seg.kind));
            if seg.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(" ".repeat(cells), style)
        })
        .collect();
    Line::from(spans)
}

/// Rect of `percent_x` by `percent_y` centered in `area`, for popups.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
