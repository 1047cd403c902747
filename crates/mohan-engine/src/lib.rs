// Engine layer: mock catalog, view state and the reducer that drives it.
// Everything here is synchronous and free of I/O; timers live in mohan-runtime.

pub mod animation;
pub mod catalog;
pub mod filter;
pub mod responder;
pub mod state;
mod update;

pub use animation::{
    AnimationFrame, AnimationPlan, AnimationSettings, MetricTarget, parse_metric_value,
    plan_metric, plan_metrics,
};
pub use catalog::{CannedReplies, Catalog, CatalogIssue};
pub use filter::{Query, filter_logs, filter_memories, filter_team_insights};
pub use responder::{AssistantRequest, CannedResponder, ResponseProvider, select_canned};
pub use state::{
    AssistantPhase, BusyPolicy, DashboardState, FilterState, Panel, PanelState, SelectionState,
};
pub use update::{Action, Command, Dashboard, DashboardOptions};
