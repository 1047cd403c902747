use serde::Serialize;

use super::assistant::{AnalysisViewModel, AssistantPanelViewModel};
use super::common::{Lookup, StatusLevel};
use super::sections::SectionViewModel;

/// One full frame of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub header: HeaderViewModel,
    pub navigation: NavigationViewModel,
    pub section: SectionViewModel,
    pub assistant: AssistantPanelViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawer: Option<DrawerViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_menu: Option<ProfileMenuViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub org: String,
    /// e.g. "Manager / Strategy Trace"
    pub breadcrumb: String,
    pub title: String,
    pub user_name: String,
    pub user_title: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationViewModel {
    pub role: String,
    pub items: Vec<NavItemViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemViewModel {
    pub shortcut: usize,
    pub title: String,
    pub slug: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawerViewModel {
    pub title: String,
    pub analysis: Lookup<AnalysisViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileMenuViewModel {
    pub name: String,
    pub title: String,
    pub org: String,
    pub current_role: String,
    pub switch_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub level: StatusLevel,
    pub message: String,
    pub hints: Vec<KeyHintViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyHintViewModel {
    pub key: String,
    pub label: String,
}
