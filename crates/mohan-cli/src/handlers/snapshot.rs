use anyhow::{Result, bail};
use mohan_engine::{Action, Dashboard, Panel};
use mohan_types::{MemoryTab, Role, Section};
use tracing::debug;

use crate::context::AppContext;
use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Selections applied before the frame is captured.
#[derive(Debug, Default)]
pub struct SnapshotRequest {
    pub section: Option<Section>,
    pub drift: Option<String>,
    pub trace: Option<String>,
    pub stage: Option<String>,
    /// `"all"` clears the department filter.
    pub department: Option<String>,
    pub tab: Option<MemoryTab>,
    pub search: Option<String>,
    pub panels: Vec<Panel>,
}

impl SnapshotRequest {
    /// Sections outside the role's list are an error here, not a no-op.
    pub fn check(&self, role: Role) -> Result<()> {
        if let Some(section) = self.section
            && !role.has_section(section)
        {
            bail!("section '{}' is not available for the {} role", section.slug(), role);
        }
        Ok(())
    }

    pub fn actions(self) -> Vec<Action> {
        let mut actions = vec![Action::Mount];
        let section = self.section;
        if let Some(section) = section {
            actions.push(Action::SelectSection(section));
        }
        if let Some(key) = self.drift {
            actions.push(Action::SelectDrift(key));
        }
        if let Some(id) = self.trace {
            actions.push(Action::SelectTrace(id));
        }
        if let Some(id) = self.stage {
            actions.push(Action::SelectStage(id));
        }
        if let Some(department) = self.department {
            let department = (!department.eq_ignore_ascii_case("all")).then_some(department);
            actions.push(Action::SelectDepartment(department));
        }
        if let Some(tab) = self.tab {
            actions.push(Action::SelectMemoryTab(tab));
        }
        if let Some(query) = self.search {
            match section {
                Some(Section::WorkflowTraces) => actions.push(Action::SetLogQuery(query)),
                _ => actions.push(Action::SetMemoryQuery(query)),
            }
        }
        actions.extend(self.panels.into_iter().map(|p| Action::SetPanel(p, true)));
        actions
    }
}

pub fn handle(ctx: &AppContext, request: SnapshotRequest, json: bool) -> Result<()> {
    request.check(ctx.role)?;

    let mut options = ctx.dashboard_options();
    // A snapshot is a single frame: metrics show their final values.
    options.animation = None;
    let mut dashboard = Dashboard::new(ctx.catalog.clone(), options);

    for action in request.actions() {
        debug!(?action, "snapshot");
        // No executor here; any reply request is dropped.
        dashboard.update(action);
    }

    let screen = present_screen(dashboard.state(), dashboard.catalog());
    ConsoleRenderer::new(json).render(CommandResultViewModel::new(screen))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_all_clears_filter() {
        let request = SnapshotRequest {
            department: Some("All".to_string()),
            ..SnapshotRequest::default()
        };
        assert_eq!(
            request.actions(),
            vec![Action::Mount, Action::SelectDepartment(None)]
        );
    }

    #[test]
    fn test_foreign_section_is_refused() {
        let request = SnapshotRequest {
            section: Some(Section::StrategyTrace),
            ..SnapshotRequest::default()
        };
        let err = request.check(Role::Employee).unwrap_err();
        assert!(err.to_string().contains("not available for the employee role"));
        assert!(request.check(Role::Manager).is_ok());
        assert!(SnapshotRequest::default().check(Role::Employee).is_ok());
    }

    #[test]
    fn test_search_follows_section() {
        let request = SnapshotRequest {
            section: Some(Section::WorkflowTraces),
            search: Some("deploy".to_string()),
            panels: vec![Panel::AiDrawer],
            ..SnapshotRequest::default()
        };
        assert_eq!(
            request.actions(),
            vec![
                Action::Mount,
                Action::SelectSection(Section::WorkflowTraces),
                Action::SetLogQuery("deploy".to_string()),
                Action::SetPanel(Panel::AiDrawer, true),
            ]
        );

        let request = SnapshotRequest {
            search: Some("roadmap".to_string()),
            ..SnapshotRequest::default()
        };
        assert_eq!(
            request.actions(),
            vec![Action::Mount, Action::SetMemoryQuery("roadmap".to_string())]
        );
    }
}
