//! Main content area: one widget for whichever section is active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{bar_line, segment_color, status_level_to_color};
use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{
    BarSegmentViewModel, Lookup, MemoryRecallViewModel, MemoryRowViewModel, MetricCardViewModel,
    MyFocusViewModel, SectionViewModel, StandupReportViewModel, StrategyTraceViewModel,
    SystemStatusViewModel, TeamPulseViewModel, WorkflowTracesViewModel,
};

const BAR_LABEL: usize = 12;

pub struct SectionView<'a> {
    model: &'a SectionViewModel,
    title: &'a str,
    scroll: u16,
}

impl<'a> SectionView<'a> {
    pub fn new(model: &'a SectionViewModel, title: &'a str) -> Self {
        Self {
            model,
            title,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }
}

impl<'a> Widget for SectionView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL);
        let bar_width = (block.inner(area).width as usize)
            .saturating_sub(BAR_LABEL + 4)
            .clamp(10, 60);

        let lines = match self.model {
            SectionViewModel::SystemStatus(vm) => system_status(vm, bar_width),
            SectionViewModel::StrategyTrace(vm) => strategy_trace(vm, bar_width),
            SectionViewModel::WorkflowTraces(vm) => workflow_traces(vm, bar_width),
            SectionViewModel::TeamPulse(vm) => team_pulse(vm),
            SectionViewModel::MyFocus(vm) => my_focus(vm),
            SectionViewModel::MemoryRecall(vm) => memory_recall(vm),
            SectionViewModel::StandupReport(vm) => standup(vm),
            SectionViewModel::Placeholder(p) => vec![dim(&p.message)],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

fn dim(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ))
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("▶ ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("  ")
    }
}

fn labeled_bar(label: &str, segments: &[BarSegmentViewModel], width: usize) -> Vec<Line<'static>> {
    let mut bar = vec![Span::raw(format!("{:<w$} ", label, w = BAR_LABEL))];
    bar.extend(bar_line(segments, width).spans);

    let legend: Vec<Span<'static>> = segments
        .iter()
        .flat_map(|seg| {
            let mut style = Style::default().fg(segment_color(&seg.kind));
            if seg.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            [
                Span::styled("■ ", style),
                Span::styled(format!("{} {}%  ", seg.label, seg.percent), style),
            ]
        })
        .collect();
    let mut legend_line = vec![Span::raw(" ".repeat(BAR_LABEL + 1))];
    legend_line.extend(legend);

    vec![Line::from(bar), Line::from(legend_line)]
}

fn metrics(cards: &[MetricCardViewModel]) -> Vec<Line<'static>> {
    cards
        .iter()
        .map(|m| {
            let trend_color = if m.is_good { Color::Green } else { Color::Red };
            Line::from(vec![
                Span::raw(format!("{} {:<18} ", m.icon, m.title)),
                Span::styled(
                    format!("{:>12}", m.value),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", m.trend), Style::default().fg(trend_color)),
                Span::styled(
                    format!("  {}", m.sub),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        })
        .collect()
}

fn memory_row(row: &MemoryRowViewModel) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", row.category),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                row.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", row.app, row.timestamp),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(format!("    {}", row.context)),
        dim(&format!("    #{}", row.keywords.join(" #"))),
    ]
}

fn system_status(vm: &SystemStatusViewModel, bar_width: usize) -> Vec<Line<'static>> {
    let mut lines = metrics(&vm.metrics);

    lines.push(Line::default());
    lines.push(heading("Live signals"));
    for risk in &vm.risks {
        lines.push(Line::from(vec![
            marker(risk.selected),
            Span::styled(
                format!("{:<9}", risk.level),
                Style::default().fg(status_level_to_color(risk.status)),
            ),
            Span::raw(risk.title.clone()),
        ]));
        lines.push(dim(&format!("           {}", risk.evidence)));
    }

    let gap = &vm.capacity_gap;
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Capacity gap  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(gap.status.clone(), Style::default().fg(Color::Red)),
    ]));
    lines.extend(labeled_bar("Planned", &gap.planned, bar_width));
    lines.extend(labeled_bar("Observed", &gap.observed, bar_width));
    match &gap.explanation {
        Some(text) => lines.push(Line::from(format!("Why: {}", text))),
        None => lines.push(dim("[Enter] explain the drift")),
    }
    lines
}

fn strategy_trace(vm: &StrategyTraceViewModel, bar_width: usize) -> Vec<Line<'static>> {
    let s = &vm.strategy;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(s.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", s.status), Style::default().fg(Color::Yellow)),
        ]),
        dim(&format!(
            "Owner {} · alignment {}% · updated {}",
            s.owner, s.alignment_score, s.last_updated
        )),
        Line::from(s.description.clone()),
    ];

    for dept in &vm.departments {
        lines.push(Line::default());
        lines.push(heading(&format!("{} ({})", dept.name, dept.total_capacity)));
        lines.extend(labeled_bar("Capacity", &dept.segments, bar_width));
    }

    lines.push(Line::default());
    match &vm.drift {
        Lookup::Found(d) => {
            lines.push(Line::from(vec![
                Span::styled(
                    d.title.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  [{}] {} · {}", d.severity, d.department, d.impact)),
            ]));
            lines.push(Line::from(d.observation.clone()));
            for item in &d.evidence {
                lines.push(Line::from(format!("  • {}", item)));
            }
            lines.push(Line::from(vec![
                Span::styled("Recommendation: ", Style::default().fg(Color::Green)),
                Span::raw(d.recommendation.clone()),
            ]));
        }
        Lookup::Missing(p) => lines.push(dim(&p.message)),
    }
    lines
}

fn workflow_traces(vm: &WorkflowTracesViewModel, bar_width: usize) -> Vec<Line<'static>> {
    let tabs: Vec<Span<'static>> = vm
        .traces
        .iter()
        .map(|t| {
            if t.active {
                Span::styled(
                    format!(" {} ", t.name),
                    Style::default().add_modifier(Modifier::REVERSED),
                )
            } else {
                Span::raw(format!(" {} ", t.name))
            }
        })
        .collect();
    let mut lines = vec![Line::from(tabs)];

    let detail = match &vm.trace {
        Lookup::Found(detail) => detail,
        Lookup::Missing(p) => {
            lines.push(dim(&p.message));
            return lines;
        }
    };

    lines.push(dim(&format!(
        "{} · total {}",
        detail.owner, detail.total_duration
    )));
    lines.extend(labeled_bar("Time", &detail.segments, bar_width));

    lines.push(Line::default());
    lines.push(heading("Stages"));
    for stage in &detail.stages {
        let mut spans = vec![
            marker(stage.selected),
            Span::raw(format!(
                "{:<20} {:<12} {:>6}  ",
                truncate(&stage.name, 20),
                truncate(&stage.tool, 12),
                stage.duration
            )),
            Span::styled(
                format!("{:<8}", stage.kind),
                Style::default().fg(status_level_to_color(stage.status)),
            ),
            Span::styled(
                format!(" {}", stage.owner),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ];
        if stage.has_insight {
            spans.push(Span::styled(" ⚠", Style::default().fg(Color::Red)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    match &detail.stage {
        Lookup::Found(stage) => {
            lines.push(heading(&format!("{} · {}", stage.name, stage.tool)));
            match &stage.insight {
                Some(Lookup::Found(i)) => {
                    lines.push(Line::from(vec![
                        Span::styled(
                            i.title.clone(),
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  [{}] {}", i.severity, i.impact)),
                    ]));
                    lines.push(Line::from(format!("Root cause: {}", i.root_cause)));
                    lines.push(Line::from(i.observation.clone()));
                    for item in &i.evidence {
                        lines.push(Line::from(format!("  • {}", item)));
                    }
                    lines.push(Line::from(vec![
                        Span::styled("Recommendation: ", Style::default().fg(Color::Green)),
                        Span::raw(i.recommendation.clone()),
                    ]));
                }
                Some(Lookup::Missing(p)) => lines.push(dim(&p.message)),
                None => lines.push(dim("No insight recorded for this stage.")),
            }
        }
        Lookup::Missing(p) => lines.push(dim(&p.message)),
    }

    lines.push(Line::default());
    let title = if detail.log_query.is_empty() {
        format!("Activity log ({})", detail.total_logs)
    } else {
        format!(
            "Activity log ({} of {}) /{}",
            detail.logs.len(),
            detail.total_logs,
            detail.log_query
        )
    };
    lines.push(heading(&title));
    for log in &detail.logs {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", log.timestamp),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::styled(format!("{:<12} ", log.app), Style::default().fg(Color::Cyan)),
            Span::raw(log.message.clone()),
        ]));
    }
    lines
}

fn team_pulse(vm: &TeamPulseViewModel) -> Vec<Line<'static>> {
    let chips: Vec<Span<'static>> = vm
        .filters
        .iter()
        .map(|c| {
            if c.active {
                Span::styled(
                    format!(" {} ", c.label),
                    Style::default().add_modifier(Modifier::REVERSED),
                )
            } else {
                Span::raw(format!(" {} ", c.label))
            }
        })
        .collect();
    let mut lines = vec![Line::from(chips), Line::default()];

    lines.push(heading(&format!(
        "  {:<18} {:>6} {:>7} {:>9} {:>8}",
        "Department", "Focus", "Collab", "Friction", "Members"
    )));
    for c in &vm.compositions {
        lines.push(Line::from(vec![
            marker(c.highlighted),
            Span::raw(format!("{:<18} ", c.name)),
            Span::styled(format!("{:>5}%", c.focus), Style::default().fg(Color::Green)),
            Span::styled(format!("{:>7}%", c.collab), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:>9}%", c.friction), Style::default().fg(Color::Red)),
            Span::raw(format!("{:>9}", c.members)),
        ]));
    }

    lines.push(Line::default());
    if let Some(message) = &vm.empty_message {
        lines.push(dim(message));
        return lines;
    }
    for insight in &vm.insights {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<7}", insight.severity),
                Style::default().fg(status_level_to_color(insight.status)),
            ),
            Span::styled(
                insight.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", insight.department, insight.kind),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
        lines.push(Line::from(format!("       {}", insight.content)));
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled("→ ", Style::default().fg(Color::Green)),
            Span::raw(insight.action.clone()),
        ]));
    }
    lines
}

fn my_focus(vm: &MyFocusViewModel) -> Vec<Line<'static>> {
    let mut lines = vec![heading(&vm.greeting), Line::default()];
    lines.extend(metrics(&vm.metrics));
    lines.push(Line::default());
    lines.push(heading("Recent memories"));
    for row in &vm.recent {
        lines.extend(memory_row(row));
    }
    lines
}

fn memory_recall(vm: &MemoryRecallViewModel) -> Vec<Line<'static>> {
    let tabs: Vec<Span<'static>> = vm
        .tabs
        .iter()
        .map(|t| {
            let text = format!(" {} ({}) ", t.label, t.count);
            if t.active {
                Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Span::raw(text)
            }
        })
        .collect();
    let mut lines = vec![Line::from(tabs)];
    if vm.query.is_empty() {
        lines.push(dim("[/] search memories"));
    } else {
        lines.push(Line::from(format!("/{}", vm.query)));
    }
    lines.push(Line::default());

    if let Some(message) = &vm.empty_message {
        lines.push(dim(message));
        return lines;
    }
    for row in &vm.items {
        lines.extend(memory_row(row));
    }
    lines
}

fn standup(vm: &StandupReportViewModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match &vm.report {
        Lookup::Found(report) => {
            lines.push(heading(&format!("{} · {}", report.title, report.date_label)));
            for section in &report.sections {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    section.heading.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for bullet in &section.bullets {
                    lines.push(Line::from(format!("  • {}", bullet)));
                }
            }
        }
        Lookup::Missing(p) => lines.push(dim(&p.message)),
    }
    lines.push(Line::default());
    lines.push(dim(&vm.hint));
    lines
}
