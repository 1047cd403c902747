use std::fmt;

use super::assistant::{AssistantPanelView, write_analysis, write_report};
use crate::presentation::formatters::{bar_fill, bar_widths, terminal_width, truncate};
use crate::presentation::view_models::{
    BarSegmentViewModel, Lookup, MemoryRecallViewModel, MemoryRowViewModel, MetricCardViewModel,
    MyFocusViewModel, ScreenViewModel, SectionViewModel, StandupReportViewModel,
    StrategyTraceViewModel, SystemStatusViewModel, TeamPulseViewModel, WorkflowTracesViewModel,
};

impl fmt::Display for ScreenViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ScreenView::new(self, terminal_width()).fmt(f)
    }
}

// --------------------------------------------------------
// Screen
// --------------------------------------------------------

/// Plain-text rendering of one dashboard frame.
pub struct ScreenView<'a> {
    data: &'a ScreenViewModel,
    width: usize,
}

impl<'a> ScreenView<'a> {
    pub fn new(data: &'a ScreenViewModel, width: usize) -> Self {
        Self { data, width }
    }

    fn bar_width(&self) -> usize {
        self.width.saturating_sub(24).clamp(20, 60)
    }

    fn rule(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", "─".repeat(self.width.min(100)))
    }

    fn write_bar(
        &self,
        f: &mut fmt::Formatter,
        label: &str,
        segments: &[BarSegmentViewModel],
    ) -> fmt::Result {
        let percents: Vec<u8> = segments.iter().map(|s| s.percent).collect();
        let widths = bar_widths(&percents, self.bar_width());
        let bar: String = segments
            .iter()
            .zip(widths)
            .map(|(seg, cells)| bar_fill(&seg.kind).to_string().repeat(cells))
            .collect();
        writeln!(f, "  {:<12} {}", label, bar)?;
        for seg in segments {
            let marker = if seg.selected { ">" } else { " " };
            writeln!(
                f,
                "  {:<12} {} {:>3}% {} ({})",
                "",
                marker,
                seg.percent,
                seg.label,
                seg.kind
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ScreenView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let screen = self.data;
        let header = &screen.header;

        writeln!(f, "{}  ·  {}", header.org, header.breadcrumb)?;
        writeln!(
            f,
            "[{}] {} ({})",
            header.avatar, header.user_name, header.user_title
        )?;

        let nav: Vec<String> = screen
            .navigation
            .items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{} {}]", item.shortcut, item.title)
                } else {
                    format!("{} {}", item.shortcut, item.title)
                }
            })
            .collect();
        writeln!(f, "{}", nav.join("  "))?;
        self.rule(f)?;

        writeln!(f, "{}", header.title.to_uppercase())?;
        writeln!(f)?;
        match &screen.section {
            SectionViewModel::SystemStatus(vm) => self.system_status(f, vm)?,
            SectionViewModel::StrategyTrace(vm) => self.strategy_trace(f, vm)?,
            SectionViewModel::WorkflowTraces(vm) => self.workflow_traces(f, vm)?,
            SectionViewModel::TeamPulse(vm) => self.team_pulse(f, vm)?,
            SectionViewModel::MyFocus(vm) => self.my_focus(f, vm)?,
            SectionViewModel::MemoryRecall(vm) => self.memory_recall(f, vm)?,
            SectionViewModel::StandupReport(vm) => self.standup(f, vm)?,
            SectionViewModel::Placeholder(vm) => writeln!(f, "{}", vm.message)?,
        }

        if let Some(drawer) = &screen.drawer {
            self.rule(f)?;
            writeln!(f, "{}", drawer.title)?;
            match &drawer.analysis {
                Lookup::Found(analysis) => write_analysis(f, analysis, "  ")?,
                Lookup::Missing(p) => writeln!(f, "  {}", p.message)?,
            }
        }

        if screen.assistant.open {
            self.rule(f)?;
            write!(f, "{}", AssistantPanelView::new(&screen.assistant))?;
        }

        if let Some(menu) = &screen.profile_menu {
            self.rule(f)?;
            writeln!(f, "{} · {} · {}", menu.name, menu.title, menu.org)?;
            writeln!(f, "  Viewing as {}. {}", menu.current_role, menu.switch_label)?;
        }

        self.rule(f)?;
        writeln!(f, "{}", screen.status_bar.message)
    }
}

fn write_metrics(f: &mut fmt::Formatter, metrics: &[MetricCardViewModel]) -> fmt::Result {
    for m in metrics {
        writeln!(f, "  {} {:<18} {:>12}  {}", m.icon, m.title, m.value, m.trend)?;
        writeln!(f, "    {}", m.sub)?;
    }
    Ok(())
}

fn write_memory_row(f: &mut fmt::Formatter, row: &MemoryRowViewModel) -> fmt::Result {
    writeln!(
        f,
        "  #{} [{}] {} ({}, {})",
        row.id, row.category, row.title, row.app, row.timestamp
    )?;
    writeln!(f, "      {}", row.context)
}

// --------------------------------------------------------
// Sections
// --------------------------------------------------------

impl<'a> ScreenView<'a> {
    fn system_status(&self, f: &mut fmt::Formatter, vm: &SystemStatusViewModel) -> fmt::Result {
        write_metrics(f, &vm.metrics)?;

        writeln!(f, "\nLive signals")?;
        for risk in &vm.risks {
            let marker = if risk.selected { ">" } else { " " };
            writeln!(f, "{} [{}] {}", marker, risk.level, risk.title)?;
            writeln!(f, "      {}", risk.evidence)?;
        }

        let gap = &vm.capacity_gap;
        writeln!(f, "\nCapacity gap: {}", gap.status)?;
        self.write_bar(f, "Planned", &gap.planned)?;
        self.write_bar(f, "Observed", &gap.observed)?;
        if let Some(explanation) = &gap.explanation {
            writeln!(f, "  Why: {}", explanation)?;
        }
        Ok(())
    }

    fn strategy_trace(&self, f: &mut fmt::Formatter, vm: &StrategyTraceViewModel) -> fmt::Result {
        let s = &vm.strategy;
        writeln!(f, "{} ({}, owner {})", s.name, s.status, s.owner)?;
        writeln!(
            f,
            "  Alignment {}% · updated {}",
            s.alignment_score, s.last_updated
        )?;
        writeln!(f, "  {}", s.description)?;

        for dept in &vm.departments {
            writeln!(f, "\n{} ({})", dept.name, dept.total_capacity)?;
            self.write_bar(f, "Capacity", &dept.segments)?;
        }

        writeln!(f)?;
        match &vm.drift {
            Lookup::Found(d) => {
                writeln!(f, "Drift: {} [{}]", d.title, d.severity)?;
                writeln!(f, "  {} · {}", d.department, d.impact)?;
                writeln!(f, "  {}", d.observation)?;
                for item in &d.evidence {
                    writeln!(f, "  - {}", item)?;
                }
                writeln!(f, "  Recommendation: {}", d.recommendation)?;
            }
            Lookup::Missing(p) => writeln!(f, "{}", p.message)?,
        }
        Ok(())
    }

    fn workflow_traces(
        &self,
        f: &mut fmt::Formatter,
        vm: &WorkflowTracesViewModel,
    ) -> fmt::Result {
        let tabs: Vec<String> = vm
            .traces
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.name)
                } else {
                    t.name.clone()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join("  "))?;

        let detail = match &vm.trace {
            Lookup::Found(detail) => detail,
            Lookup::Missing(p) => return writeln!(f, "\n{}", p.message),
        };

        writeln!(
            f,
            "\n{} · {} · {}",
            detail.name, detail.owner, detail.total_duration
        )?;
        self.write_bar(f, "Time", &detail.segments)?;

        writeln!(f, "\nStages")?;
        for stage in &detail.stages {
            let marker = if stage.selected { ">" } else { " " };
            let flag = if stage.has_insight { " !" } else { "" };
            writeln!(
                f,
                "{} {:<20} {:<12} {:>6}  {:<8} {}{}",
                marker,
                truncate(&stage.name, 20),
                truncate(&stage.tool, 12),
                stage.duration,
                stage.kind,
                stage.owner,
                flag
            )?;
        }

        writeln!(f)?;
        match &detail.stage {
            Lookup::Found(stage) => {
                writeln!(
                    f,
                    "{} ({}, {}, {})",
                    stage.name, stage.tool, stage.duration, stage.kind
                )?;
                match &stage.insight {
                    Some(Lookup::Found(i)) => {
                        writeln!(f, "  {} [{}]", i.title, i.severity)?;
                        writeln!(f, "  Impact: {}", i.impact)?;
                        writeln!(f, "  Root cause: {}", i.root_cause)?;
                        writeln!(f, "  {}", i.observation)?;
                        for item in &i.evidence {
                            writeln!(f, "  - {}", item)?;
                        }
                        writeln!(f, "  Recommendation: {}", i.recommendation)?;
                    }
                    Some(Lookup::Missing(p)) => writeln!(f, "  {}", p.message)?,
                    None => writeln!(f, "  No insight for this stage.")?,
                }
            }
            Lookup::Missing(p) => writeln!(f, "{}", p.message)?,
        }

        if detail.log_query.trim().is_empty() {
            writeln!(f, "\nActivity log ({})", detail.total_logs)?;
        } else {
            writeln!(
                f,
                "\nActivity log ({} of {}, filter \"{}\")",
                detail.logs.len(),
                detail.total_logs,
                detail.log_query.trim()
            )?;
        }
        for log in &detail.logs {
            writeln!(f, "  {}  {:<12} {}", log.timestamp, log.app, log.message)?;
        }
        Ok(())
    }

    fn team_pulse(&self, f: &mut fmt::Formatter, vm: &TeamPulseViewModel) -> fmt::Result {
        let chips: Vec<String> = vm
            .filters
            .iter()
            .map(|c| {
                if c.active {
                    format!("[{}]", c.label)
                } else {
                    c.label.clone()
                }
            })
            .collect();
        writeln!(f, "{}", chips.join("  "))?;

        writeln!(
            f,
            "\n  {:<18} {:>6} {:>7} {:>9} {:>8}",
            "DEPARTMENT", "FOCUS", "COLLAB", "FRICTION", "MEMBERS"
        )?;
        for c in &vm.compositions {
            let marker = if c.highlighted { ">" } else { " " };
            writeln!(
                f,
                "{} {:<18} {:>5}% {:>6}% {:>8}% {:>8}",
                marker, c.name, c.focus, c.collab, c.friction, c.members
            )?;
        }

        writeln!(f)?;
        if let Some(message) = &vm.empty_message {
            return writeln!(f, "{}", message);
        }
        for insight in &vm.insights {
            writeln!(
                f,
                "[{}] {} ({}, {})",
                insight.severity, insight.title, insight.department, insight.kind
            )?;
            writeln!(f, "    {}", insight.content)?;
            writeln!(f, "    Action: {}", insight.action)?;
        }
        Ok(())
    }

    fn my_focus(&self, f: &mut fmt::Formatter, vm: &MyFocusViewModel) -> fmt::Result {
        writeln!(f, "{}\n", vm.greeting)?;
        write_metrics(f, &vm.metrics)?;
        writeln!(f, "\nRecent memories")?;
        for row in &vm.recent {
            write_memory_row(f, row)?;
        }
        Ok(())
    }

    fn memory_recall(&self, f: &mut fmt::Formatter, vm: &MemoryRecallViewModel) -> fmt::Result {
        let tabs: Vec<String> = vm
            .tabs
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{} {}]", t.label, t.count)
                } else {
                    format!("{} {}", t.label, t.count)
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join("  "))?;
        if !vm.query.trim().is_empty() {
            writeln!(f, "Search: {}", vm.query.trim())?;
        }
        writeln!(f)?;

        if let Some(message) = &vm.empty_message {
            return writeln!(f, "{}", message);
        }
        for row in &vm.items {
            write_memory_row(f, row)?;
        }
        Ok(())
    }

    fn standup(&self, f: &mut fmt::Formatter, vm: &StandupReportViewModel) -> fmt::Result {
        match &vm.report {
            Lookup::Found(report) => write_report(f, report, "")?,
            Lookup::Missing(p) => writeln!(f, "{}", p.message)?,
        }
        writeln!(f, "\n{}", vm.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_screen;
    use mohan_engine::{Action, Catalog, Dashboard, DashboardOptions};
    use mohan_types::{Role, Section};

    fn render(dash: &Dashboard) -> String {
        let screen = present_screen(dash.state(), dash.catalog());
        ScreenView::new(&screen, 80).to_string()
    }

    fn dashboard(role: Role) -> Dashboard {
        Dashboard::new(
            Catalog::builtin(),
            DashboardOptions {
                role,
                animation: None,
                ..DashboardOptions::default()
            },
        )
    }

    #[test]
    fn test_system_status_lists_metrics_and_signals() {
        let dash = dashboard(Role::Manager);
        let out = render(&dash);
        assert!(out.contains("[1 System Status]  2 Strategy Trace"));
        assert!(out.contains("14.2 Days"));
        assert!(out.contains("> [Critical] Staging Blocked"));
        assert!(out.contains("Capacity gap: Critical Deviation"));
    }

    #[test]
    fn test_bar_uses_fixed_cells() {
        let dash = dashboard(Role::Manager);
        let out = render(&dash);
        let observed = out
            .lines()
            .find(|l| l.trim_start().starts_with("Observed"))
            .expect("observed bar");
        let cells = observed.chars().filter(|c| "█▓░".contains(*c)).count();
        assert_eq!(cells, 56);
    }

    #[test]
    fn test_placeholder_section_message() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectSection(Section::Settings));
        let out = render(&dash);
        assert!(out.contains("Content for \"Settings\" would appear here."));
    }
}
