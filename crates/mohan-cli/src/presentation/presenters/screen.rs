use mohan_engine::{Catalog, DashboardState};
use mohan_types::{Role, Section};

use super::assistant::{analysis_card, latest_analysis, present_assistant};
use super::sections::present_section;
use crate::presentation::view_models::{
    AnalysisViewModel, DrawerViewModel, HeaderViewModel, KeyHintViewModel, Lookup, NavItemViewModel,
    NavigationViewModel, ProfileMenuViewModel, ScreenViewModel, StatusBarViewModel, StatusLevel,
};

pub fn present_screen(state: &DashboardState, catalog: &Catalog) -> ScreenViewModel {
    ScreenViewModel {
        header: present_header(state, catalog),
        navigation: present_navigation(state),
        section: present_section(state, catalog),
        assistant: present_assistant(state, catalog),
        drawer: state.panels.ai_drawer.then(|| DrawerViewModel {
            title: "AI Analysis".to_string(),
            analysis: match drawer_analysis(state, catalog) {
                Some(analysis) => Lookup::Found(analysis),
                None => Lookup::missing("No analysis yet. Ask the assistant about a drift."),
            },
        }),
        profile_menu: state.panels.profile_menu.then(|| ProfileMenuViewModel {
            name: catalog.profile.name.clone(),
            title: catalog.profile.role_label.clone(),
            org: catalog.profile.org.clone(),
            current_role: state.role().label().to_string(),
            switch_label: format!("Switch to {} view", state.role().other().label()),
        }),
        status_bar: present_status_bar(state),
    }
}

/// The latest reply's card, or the catalog's drift alert before any reply.
fn drawer_analysis(state: &DashboardState, catalog: &Catalog) -> Option<AnalysisViewModel> {
    latest_analysis(&state.assistant.messages).or_else(|| {
        catalog
            .canned
            .drift_alert
            .payload
            .as_ref()
            .and_then(analysis_card)
    })
}

fn present_header(state: &DashboardState, catalog: &Catalog) -> HeaderViewModel {
    let section = state.nav.section;
    HeaderViewModel {
        org: catalog.profile.org.clone(),
        breadcrumb: format!("{} / {}", state.role().label(), section.title()),
        title: section.title().to_string(),
        user_name: catalog.profile.name.clone(),
        user_title: catalog.profile.role_label.clone(),
        avatar: catalog.profile.avatar_initials.clone(),
    }
}

fn present_navigation(state: &DashboardState) -> NavigationViewModel {
    NavigationViewModel {
        role: state.role().label().to_string(),
        items: state
            .role()
            .sections()
            .iter()
            .enumerate()
            .map(|(idx, section)| NavItemViewModel {
                shortcut: idx + 1,
                title: section.title().to_string(),
                slug: section.slug().to_string(),
                active: *section == state.nav.section,
            })
            .collect(),
    }
}

fn hint(key: &str, label: &str) -> KeyHintViewModel {
    KeyHintViewModel {
        key: key.to_string(),
        label: label.to_string(),
    }
}

fn present_status_bar(state: &DashboardState) -> StatusBarViewModel {
    let assistant = &state.assistant;
    let (level, message) = if assistant.is_thinking() {
        let mut message = "Mohan AI is analyzing screen context...".to_string();
        if assistant.queued() > 0 {
            message.push_str(&format!(" (+{} queued)", assistant.queued()));
        }
        (StatusLevel::Info, message)
    } else {
        (
            StatusLevel::Success,
            format!("{} view, {} messages", state.role().label(), assistant.messages.len()),
        )
    };

    let mut hints = vec![
        hint("q", "quit"),
        hint("Tab", "section"),
        hint("r", "role"),
        hint("j/k", "select"),
        hint("i", "ask"),
        hint("a", "assistant"),
    ];
    match state.role() {
        Role::Manager => hints.push(hint("d", "drawer")),
        Role::Employee => hints.push(hint("s", "scenario")),
    }
    if matches!(state.nav.section, Section::MemoryRecall | Section::WorkflowTraces) {
        hints.push(hint("/", "search"));
    }

    StatusBarViewModel {
        level,
        message,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohan_engine::{Action, Dashboard, DashboardOptions, Panel};

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
    fn test_navigation_marks_active_section() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectSection(Section::MemoryRecall));
        let screen = present_screen(dash.state(), dash.catalog());

        let titles: Vec<&str> = screen.navigation.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["My Focus", "Memory Recall", "Standup Report", "Settings"]
        );
        let active: Vec<usize> = screen
            .navigation
            .items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.shortcut)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(screen.header.breadcrumb, "Employee / Memory Recall");
    }

    #[test]
    fn test_drawer_before_reply_shows_drift_alert() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::TogglePanel(Panel::AiDrawer));
        let screen = present_screen(dash.state(), dash.catalog());

        let drawer = screen.drawer.expect("drawer open");
        let analysis = drawer.analysis.found().expect("drift alert card");
        assert!(analysis.summary.starts_with("Strategic alignment dropped 8%"));
    }

    #[test]
    fn test_drawer_without_any_card_is_placeholder() {
        let mut catalog = Catalog::builtin();
        catalog.canned.drift_alert.payload = None;
        let mut dash = Dashboard::new(
            catalog,
            DashboardOptions {
                animation: None,
                ..DashboardOptions::default()
            },
        );
        dash.update(Action::TogglePanel(Panel::AiDrawer));
        let screen = present_screen(dash.state(), dash.catalog());

        let drawer = screen.drawer.expect("drawer open");
        assert!(drawer.analysis.found().is_none());
    }

    #[test]
    fn test_profile_menu_offers_other_role() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::TogglePanel(Panel::ProfileMenu));
        let screen = present_screen(dash.state(), dash.catalog());

        let menu = screen.profile_menu.expect("menu open");
        assert_eq!(menu.switch_label, "Switch to Employee view");
        assert_eq!(menu.title, "CEO / Admin");
    }

    #[test]
    fn test_status_bar_reports_thinking() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::Submit {
            text: "where was the staging fix?".to_string(),
            scenario: None,
        });
        let screen = present_screen(dash.state(), dash.catalog());
        assert_eq!(screen.status_bar.level, StatusLevel::Info);
        assert!(screen.status_bar.message.contains("analyzing"));
        assert!(screen.assistant.open);
        assert_eq!(screen.assistant.scenario.as_deref(), Some("memory"));
    }
}
