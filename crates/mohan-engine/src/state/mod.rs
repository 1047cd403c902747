mod assistant;
mod metrics;
mod navigation;
mod panels;
mod selection;

pub use assistant::{AssistantPhase, AssistantState, BusyPolicy, DeliverOutcome, SubmitOutcome};
pub use metrics::MetricDisplay;
pub use navigation::NavigationState;
pub use panels::{Panel, PanelState};
pub use selection::SelectionState;
pub(crate) use selection::cycle_key;

use mohan_types::Role;
use serde::Serialize;

use crate::Catalog;

/// Free-text search fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub memory_query: String,
    pub log_query: String,
}

/// The whole view state. Mutated only through `Dashboard::update`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    pub nav: NavigationState,
    pub selection: SelectionState,
    pub panels: PanelState,
    pub assistant: AssistantState,
    pub metrics: MetricDisplay,
    pub filters: FilterState,
    pub mounted: bool,
}

impl DashboardState {
    pub fn new(role: Role, catalog: &Catalog) -> Self {
        Self {
            nav: NavigationState::new(role),
            selection: SelectionState::for_role(role, catalog),
            panels: PanelState::default(),
            assistant: AssistantState::default(),
            metrics: MetricDisplay::settled(catalog.metrics_for(role)),
            filters: FilterState::default(),
            mounted: false,
        }
    }

    pub fn role(&self) -> Role {
        self.nav.role
    }

    /// Everything section-local goes back to its default for `role`.
    pub(crate) fn reset_for_role(&mut self, role: Role, catalog: &Catalog) {
        self.nav = NavigationState::new(role);
        self.selection = SelectionState::for_role(role, catalog);
        self.panels = PanelState::default();
        self.assistant.reset();
        self.metrics.settle(catalog.metrics_for(role));
        self.filters = FilterState::default();
    }
}
