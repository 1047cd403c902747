use mohan_engine::{Catalog, DashboardState, filter_logs, filter_memories, filter_team_insights};
use mohan_types::{
    ChatPayload, GapSegment, MemoryItem, MemoryTab, MetricCard, Section, TraceSegment,
    WorkflowTrace,
};

use super::assistant::present_report;
use crate::presentation::formatters::{
    icon_glyph, risk_status, segment_kind, severity_status, stage_status,
};
use crate::presentation::view_models::{
    BarSegmentViewModel, CapacityGapViewModel, CompositionViewModel, DepartmentTraceViewModel,
    DriftDetailViewModel, FilterChipViewModel, LogViewModel, Lookup, MemoryRecallViewModel,
    MemoryRowViewModel, MemoryTabViewModel, MetricCardViewModel, MyFocusViewModel,
    PlaceholderViewModel, RiskViewModel, SectionViewModel, StageDetailViewModel, StageViewModel,
    StandupReportViewModel, StrategyHeaderViewModel, StrategyTraceViewModel,
    SystemStatusViewModel, TeamInsightViewModel, TeamPulseViewModel, TraceTabViewModel,
    WorkflowDetailViewModel, WorkflowInsightViewModel, WorkflowTracesViewModel,
};

/// Number of memories previewed on the My Focus page.
const RECENT_MEMORIES: usize = 3;

pub fn present_section(state: &DashboardState, catalog: &Catalog) -> SectionViewModel {
    match state.nav.section {
        Section::SystemStatus => SectionViewModel::SystemStatus(present_system_status(state, catalog)),
        Section::StrategyTrace => {
            SectionViewModel::StrategyTrace(present_strategy_trace(state, catalog))
        }
        Section::WorkflowTraces => {
            SectionViewModel::WorkflowTraces(present_workflow_traces(state, catalog))
        }
        Section::TeamPulse => SectionViewModel::TeamPulse(present_team_pulse(state, catalog)),
        Section::MyFocus => SectionViewModel::MyFocus(present_my_focus(state, catalog)),
        Section::MemoryRecall => SectionViewModel::MemoryRecall(present_memory_recall(state, catalog)),
        Section::StandupReport => SectionViewModel::StandupReport(present_standup(catalog)),
        Section::Settings => SectionViewModel::Placeholder(placeholder_for(Section::Settings)),
    }
}

pub fn placeholder_for(section: Section) -> PlaceholderViewModel {
    PlaceholderViewModel::new(format!(
        "Content for \"{}\" would appear here.",
        section.title()
    ))
}

/// Cards show the animated slot text; a slot the catalog has no card for is skipped.
fn present_metrics(state: &DashboardState, metrics: &[MetricCard]) -> Vec<MetricCardViewModel> {
    metrics
        .iter()
        .enumerate()
        .map(|(slot, metric)| MetricCardViewModel {
            icon: icon_glyph(metric.icon).to_string(),
            title: metric.title.clone(),
            value: state
                .metrics
                .text(slot)
                .unwrap_or(metric.value.as_str())
                .to_string(),
            target: metric.value.clone(),
            sub: metric.sub.clone(),
            trend: metric.trend.clone(),
            is_good: metric.is_good,
        })
        .collect()
}

fn trace_segment(segment: &TraceSegment, selected: Option<&str>) -> BarSegmentViewModel {
    BarSegmentViewModel {
        label: segment.label.clone(),
        percent: segment.percent,
        kind: segment_kind(segment.kind).to_string(),
        drift_key: segment.drift_key.clone(),
        selected: segment.drift_key.is_some() && segment.drift_key.as_deref() == selected,
    }
}

fn gap_segment(segment: &GapSegment) -> BarSegmentViewModel {
    BarSegmentViewModel {
        label: segment.label.clone(),
        percent: segment.percent,
        kind: segment_kind(segment.kind).to_string(),
        drift_key: None,
        selected: false,
    }
}

fn memory_row(item: &MemoryItem) -> MemoryRowViewModel {
    MemoryRowViewModel {
        id: item.id,
        category: item.category.label().to_string(),
        app: item.app.clone(),
        timestamp: item.timestamp.clone(),
        title: item.title.clone(),
        context: item.context.clone(),
        keywords: item.keywords.clone(),
        related_to: item.related_to.clone(),
    }
}

// --------------------------------------------------------
// Manager pages
// --------------------------------------------------------

fn present_system_status(state: &DashboardState, catalog: &Catalog) -> SystemStatusViewModel {
    let gap = &catalog.capacity_gap;
    SystemStatusViewModel {
        metrics: present_metrics(state, &catalog.manager_metrics),
        risks: catalog
            .risks
            .iter()
            .enumerate()
            .map(|(idx, risk)| RiskViewModel {
                id: risk.id,
                title: risk.title.clone(),
                evidence: risk.evidence.clone(),
                level: risk.level.label().to_string(),
                status: risk_status(risk.level),
                selected: idx == state.selection.risk,
            })
            .collect(),
        capacity_gap: CapacityGapViewModel {
            planned: gap.planned.iter().map(gap_segment).collect(),
            observed: gap.observed.iter().map(gap_segment).collect(),
            status: gap.status.clone(),
            explanation: state
                .panels
                .drift_explanation
                .then(|| gap.explanation.clone()),
        },
    }
}

fn present_strategy_trace(state: &DashboardState, catalog: &Catalog) -> StrategyTraceViewModel {
    let strategy = &catalog.strategy;
    let selected = state.selection.drift.as_deref();

    let drift = match selected {
        None => Lookup::missing("Select a drift segment to see its analysis."),
        Some(key) => match catalog.drift(key) {
            Some(detail) => Lookup::Found(DriftDetailViewModel {
                key: detail.key.clone(),
                title: detail.title.clone(),
                department: detail.department.clone(),
                impact: detail.impact.clone(),
                severity: detail.severity.label().to_string(),
                observation: detail.observation.clone(),
                evidence: detail.evidence.clone(),
                recommendation: detail.recommendation.clone(),
            }),
            None => Lookup::missing(format!("No analysis recorded for drift \"{}\".", key)),
        },
    };

    StrategyTraceViewModel {
        strategy: StrategyHeaderViewModel {
            name: strategy.name.clone(),
            owner: strategy.owner.clone(),
            status: strategy.status.clone(),
            alignment_score: strategy.alignment_score,
            last_updated: strategy.last_updated.clone(),
            description: strategy.description.clone(),
        },
        departments: catalog
            .departments
            .iter()
            .map(|dept| DepartmentTraceViewModel {
                name: dept.name.clone(),
                total_capacity: dept.total_capacity.clone(),
                segments: dept
                    .segments
                    .iter()
                    .map(|s| trace_segment(s, selected))
                    .collect(),
            })
            .collect(),
        drift,
    }
}

fn present_workflow_traces(state: &DashboardState, catalog: &Catalog) -> WorkflowTracesViewModel {
    let selected = state.selection.trace.as_deref();

    let trace = match selected {
        None => Lookup::missing("No workflow trace selected."),
        Some(id) => match catalog.workflow(id) {
            Some(trace) => Lookup::Found(present_workflow_detail(state, catalog, trace)),
            None => Lookup::missing(format!("Workflow trace \"{}\" was not found.", id)),
        },
    };

    WorkflowTracesViewModel {
        traces: catalog
            .workflows
            .iter()
            .map(|w| TraceTabViewModel {
                id: w.id.clone(),
                name: w.name.clone(),
                active: Some(w.id.as_str()) == selected,
            })
            .collect(),
        trace,
    }
}

fn present_workflow_detail(
    state: &DashboardState,
    catalog: &Catalog,
    trace: &WorkflowTrace,
) -> WorkflowDetailViewModel {
    let selected_stage = state.selection.stage.as_deref();

    let stage = match selected_stage {
        None => Lookup::missing("Select a stage to inspect it."),
        Some(id) => match trace.stage(id) {
            None => Lookup::missing(format!("Stage \"{}\" is not part of this trace.", id)),
            Some(stage) => Lookup::Found(StageDetailViewModel {
                id: stage.id.clone(),
                name: stage.name.clone(),
                tool: stage.tool.clone(),
                duration: stage.duration.clone(),
                kind: stage.kind.label().to_string(),
                owner: stage.owner.clone(),
                insight: stage.insight_key.as_deref().map(|key| {
                    match catalog.workflow_insight(key) {
                        Some(insight) => Lookup::Found(WorkflowInsightViewModel {
                            title: insight.title.clone(),
                            severity: insight.severity.label().to_string(),
                            impact: insight.impact.clone(),
                            root_cause: insight.root_cause.clone(),
                            observation: insight.observation.clone(),
                            evidence: insight.evidence.clone(),
                            recommendation: insight.recommendation.clone(),
                        }),
                        None => Lookup::missing(format!("Insight \"{}\" is not in the catalog.", key)),
                    }
                }),
            }),
        },
    };

    let query = &state.filters.log_query;
    WorkflowDetailViewModel {
        id: trace.id.clone(),
        name: trace.name.clone(),
        owner: trace.owner.clone(),
        total_duration: trace.total_duration.clone(),
        segments: trace.segments.iter().map(|s| trace_segment(s, None)).collect(),
        stages: trace
            .stages
            .iter()
            .map(|s| StageViewModel {
                id: s.id.clone(),
                name: s.name.clone(),
                tool: s.tool.clone(),
                duration: s.duration.clone(),
                kind: s.kind.label().to_string(),
                status: stage_status(s.kind),
                owner: s.owner.clone(),
                x: s.x,
                y: s.y,
                has_insight: s.insight_key.is_some(),
                selected: Some(s.id.as_str()) == selected_stage,
            })
            .collect(),
        stage,
        log_query: query.clone(),
        logs: filter_logs(&trace.logs, query)
            .into_iter()
            .map(|log| LogViewModel {
                timestamp: log.timestamp.clone(),
                app: log.app.clone(),
                message: log.message.clone(),
            })
            .collect(),
        total_logs: trace.logs.len(),
    }
}

fn present_team_pulse(state: &DashboardState, catalog: &Catalog) -> TeamPulseViewModel {
    let selected = state.selection.department.as_deref();

    let filters = std::iter::once(FilterChipViewModel {
        label: "All".to_string(),
        active: selected.is_none(),
    })
    .chain(catalog.department_names().into_iter().map(|name| FilterChipViewModel {
        label: name.to_string(),
        active: Some(name) == selected,
    }))
    .collect();

    let insights: Vec<TeamInsightViewModel> = filter_team_insights(&catalog.team_insights, selected)
        .into_iter()
        .map(|insight| TeamInsightViewModel {
            department: insight.department.clone(),
            kind: insight.kind.label().to_string(),
            severity: insight.severity.label().to_string(),
            status: severity_status(insight.severity),
            title: insight.title.clone(),
            content: insight.content.clone(),
            action: insight.action.clone(),
        })
        .collect();

    let empty_message = insights.is_empty().then(|| match selected {
        Some(department) => format!("No insights for {}.", department),
        None => "No team insights recorded.".to_string(),
    });

    TeamPulseViewModel {
        filters,
        compositions: catalog
            .compositions
            .iter()
            .map(|c| CompositionViewModel {
                name: c.name.clone(),
                focus: c.focus,
                collab: c.collab,
                friction: c.friction,
                members: c.members,
                highlighted: Some(c.name.as_str()) == selected,
            })
            .collect(),
        insights,
        empty_message,
    }
}

// --------------------------------------------------------
// Employee pages
// --------------------------------------------------------

fn present_my_focus(state: &DashboardState, catalog: &Catalog) -> MyFocusViewModel {
    let first_name = catalog
        .profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or(&catalog.profile.name);
    MyFocusViewModel {
        greeting: format!("Welcome back, {}", first_name),
        metrics: present_metrics(state, &catalog.employee_metrics),
        recent: catalog.memories.iter().take(RECENT_MEMORIES).map(memory_row).collect(),
    }
}

fn present_memory_recall(state: &DashboardState, catalog: &Catalog) -> MemoryRecallViewModel {
    let query = &state.filters.memory_query;
    let active = state.selection.memory_tab;

    let tabs = MemoryTab::all_tabs()
        .into_iter()
        .map(|tab| MemoryTabViewModel {
            label: tab.label().to_string(),
            count: filter_memories(&catalog.memories, tab, query).len(),
            active: tab == active,
        })
        .collect();

    let items: Vec<MemoryRowViewModel> = filter_memories(&catalog.memories, active, query)
        .into_iter()
        .map(memory_row)
        .collect();

    let empty_message = items.is_empty().then(|| {
        if query.trim().is_empty() {
            format!("No memories in {}.", active.label())
        } else {
            format!("No memories match \"{}\".", query.trim())
        }
    });

    MemoryRecallViewModel {
        tabs,
        query: query.clone(),
        items,
        empty_message,
    }
}

fn present_standup(catalog: &Catalog) -> StandupReportViewModel {
    let report = match &catalog.canned.standup.payload {
        Some(ChatPayload::Report(report)) => Lookup::Found(present_report(report)),
        _ => Lookup::missing("No standup template available."),
    };
    StandupReportViewModel {
        report,
        hint: "Press [s] for the report scenario, then [i] to draft it with the assistant."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohan_engine::{Action, Dashboard, DashboardOptions, Panel};
    use mohan_types::{MemoryCategory, Role};

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

    fn section(dash: &Dashboard) -> SectionViewModel {
        present_section(dash.state(), dash.catalog())
    }

    #[test]
    fn test_system_status_shows_settled_metrics() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::Mount);
        let SectionViewModel::SystemStatus(vm) = section(&dash) else {
            panic!("expected system status");
        };
        let values: Vec<&str> = vm.metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["14.2 Days", "62%", "340 Hours"]);
        assert!(vm.risks[0].selected);
        assert_eq!(vm.capacity_gap.explanation, None);
    }

    #[test]
    fn test_drift_explanation_follows_panel() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SetPanel(Panel::DriftExplanation, true));
        let SectionViewModel::SystemStatus(vm) = section(&dash) else {
            panic!("expected system status");
        };
        assert!(vm.capacity_gap.explanation.unwrap().contains("staging"));
    }

    #[test]
    fn test_unknown_drift_renders_placeholder() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SelectSection(Section::StrategyTrace));
        dash.update(Action::SelectDrift("hr_drift".to_string()));
        let SectionViewModel::StrategyTrace(vm) = section(&dash) else {
            panic!("expected strategy trace");
        };
        match vm.drift {
            Lookup::Missing(p) => assert_eq!(p.message, "No analysis recorded for drift \"hr_drift\"."),
            Lookup::Found(_) => panic!("drift should be missing"),
        }
        assert!(vm.departments.iter().flat_map(|d| &d.segments).all(|s| !s.selected));
    }

    #[test]
    fn test_selected_drift_is_highlighted() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SelectSection(Section::StrategyTrace));
        dash.update(Action::SelectDrift("sales_drift".to_string()));
        let SectionViewModel::StrategyTrace(vm) = section(&dash) else {
            panic!("expected strategy trace");
        };
        let selected: Vec<&str> = vm
            .departments
            .iter()
            .flat_map(|d| &d.segments)
            .filter(|s| s.selected)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Admin: Data Entry"]);
        assert_eq!(vm.drift.found().map(|d| d.department.as_str()), Some("Sales"));
    }

    #[test]
    fn test_workflow_stage_and_log_filter() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SelectSection(Section::WorkflowTraces));
        dash.update(Action::SetLogQuery("JENKINS".to_string()));
        let SectionViewModel::WorkflowTraces(vm) = section(&dash) else {
            panic!("expected workflow traces");
        };
        let detail = vm.trace.found().expect("trace found");
        assert_eq!(detail.logs.len(), 2);
        assert_eq!(detail.total_logs, 6);

        let stage = detail.stage.found().expect("stage found");
        assert_eq!(stage.id, "s4");
        let insight = stage.insight.as_ref().and_then(|i| i.found()).expect("insight");
        assert_eq!(insight.title, "Staging Environment Instability");
    }

    #[test]
    fn test_stage_from_other_trace_is_placeholder() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SelectSection(Section::WorkflowTraces));
        dash.update(Action::SelectStage("l2".to_string()));
        let SectionViewModel::WorkflowTraces(vm) = section(&dash) else {
            panic!("expected workflow traces");
        };
        let detail = vm.trace.found().expect("trace found");
        assert!(detail.stage.found().is_none());
        assert!(detail.stages.iter().all(|s| !s.selected));
    }

    #[test]
    fn test_team_pulse_department_filter() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SelectSection(Section::TeamPulse));
        let SectionViewModel::TeamPulse(vm) = section(&dash) else {
            panic!("expected team pulse");
        };
        assert_eq!(vm.insights.len(), 2);
        assert!(vm.filters[1].active);

        dash.update(Action::SelectDepartment(None));
        let SectionViewModel::TeamPulse(vm) = section(&dash) else {
            panic!("expected team pulse");
        };
        assert_eq!(vm.insights.len(), 5);
        assert!(vm.filters[0].active);

        dash.update(Action::SelectDepartment(Some("Legal".to_string())));
        let SectionViewModel::TeamPulse(vm) = section(&dash) else {
            panic!("expected team pulse");
        };
        assert_eq!(vm.empty_message.as_deref(), Some("No insights for Legal."));
    }

    #[test]
    fn test_memory_recall_counts_follow_query() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectSection(Section::MemoryRecall));
        dash.update(Action::SetMemoryQuery("staging".to_string()));
        dash.update(Action::SelectMemoryTab(MemoryTab::Category(MemoryCategory::Docs)));
        let SectionViewModel::MemoryRecall(vm) = section(&dash) else {
            panic!("expected memory recall");
        };
        let counts: Vec<(&str, usize)> =
            vm.tabs.iter().map(|t| (t.label.as_str(), t.count)).collect();
        assert_eq!(
            counts,
            vec![("All", 3), ("Code", 0), ("Meetings", 1), ("Docs", 1), ("Chat", 1)]
        );
        let ids: Vec<u32> = vm.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![6]);
    }

    #[test]
    fn test_memory_recall_empty_message() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectSection(Section::MemoryRecall));
        dash.update(Action::SetMemoryQuery("  kubernetes ".to_string()));
        let SectionViewModel::MemoryRecall(vm) = section(&dash) else {
            panic!("expected memory recall");
        };
        assert_eq!(vm.empty_message.as_deref(), Some("No memories match \"kubernetes\"."));
    }

    #[test]
    fn test_settings_is_placeholder() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectSection(Section::Settings));
        let SectionViewModel::Placeholder(vm) = section(&dash) else {
            panic!("expected placeholder");
        };
        assert_eq!(vm.message, "Content for \"Settings\" would appear here.");
    }

    #[test]
    fn test_my_focus_greets_by_first_name() {
        let dash = dashboard(Role::Employee);
        let SectionViewModel::MyFocus(vm) = section(&dash) else {
            panic!("expected my focus");
        };
        assert_eq!(vm.greeting, "Welcome back, Alex");
        assert_eq!(vm.recent.len(), 3);
        assert_eq!(vm.metrics[1].value, "23 /day");
    }
}
