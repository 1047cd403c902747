//! Single state-management boundary for the dashboard.
//!
//! `Dashboard::update` takes an [`Action`], mutates the state and returns the
//! [`Command`]s the runtime has to execute (timers, cancellation). It never
//! sleeps, spawns or touches I/O.

use mohan_types::{CannedReply, MemoryTab, Role, Scenario, Section};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::animation::{AnimationPlan, AnimationSettings, plan_metrics};
use crate::responder::AssistantRequest;
use crate::state::{BusyPolicy, DashboardState, DeliverOutcome, Panel, SubmitOutcome, cycle_key};
use crate::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Mount,
    Unmount,

    SwitchRole(Role),
    SelectSection(Section),
    NextSection,
    PreviousSection,

    SelectDrift(String),
    SelectTrace(String),
    SelectStage(String),
    /// `None` shows all departments.
    SelectDepartment(Option<String>),
    SelectMemoryTab(MemoryTab),
    SelectRisk(usize),
    /// Move the selection that belongs to the current section.
    MoveSelection { forward: bool },
    /// Switch to the next/previous workflow trace.
    CycleTrace { forward: bool },

    SetMemoryQuery(String),
    SetLogQuery(String),

    TogglePanel(Panel),
    SetPanel(Panel, bool),

    EditInput(String),
    PrefillDefaultQuestion,
    SetScenario(Scenario),
    ToggleScenario,
    Submit {
        text: String,
        scenario: Option<Scenario>,
    },
    /// Submit the current input with the current scenario tag.
    SubmitInput,

    MetricFrame {
        generation: u64,
        slot: usize,
        text: String,
    },
    ReplyReady {
        ticket: u64,
        reply: CannedReply,
    },
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartAnimation {
        generation: u64,
        plans: Vec<AnimationPlan>,
    },
    CancelAnimation,
    ScheduleReply(AssistantRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub role: Role,
    /// `None` disables the mount animation.
    pub animation: Option<AnimationSettings>,
    pub busy_policy: BusyPolicy,
    /// Fixed seed for animation noise; random when unset.
    pub seed: Option<u64>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            role: Role::Manager,
            animation: Some(AnimationSettings::default()),
            busy_policy: BusyPolicy::default(),
            seed: None,
        }
    }
}

pub struct Dashboard {
    catalog: Catalog,
    options: DashboardOptions,
    state: DashboardState,
    rng: StdRng,
}

impl Dashboard {
    pub fn new(catalog: Catalog, options: DashboardOptions) -> Self {
        let state = DashboardState::new(options.role, &catalog);
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            catalog,
            options,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn update(&mut self, action: Action) -> Vec<Command> {
        let role = self.state.role();
        match action {
            Action::Mount => return self.mount(),
            Action::Unmount => {
                if !self.state.mounted {
                    return Vec::new();
                }
                self.state.mounted = false;
                self.state.metrics.cancel();
                debug!("dashboard unmounted");
                return vec![Command::CancelAnimation];
            }

            Action::SwitchRole(next) => {
                info!(from = %role, to = %next, "switching role");
                self.state.reset_for_role(next, &self.catalog);
                return vec![Command::CancelAnimation];
            }
            Action::SelectSection(section) => {
                if !self.state.nav.select(section) {
                    warn!(%section, %role, "section not available for role");
                }
            }
            Action::NextSection => self.state.nav.next(),
            Action::PreviousSection => self.state.nav.previous(),

            Action::SelectDrift(key) if self.manager_only("drift") => {
                self.state.selection.drift = Some(key);
            }
            Action::SelectTrace(id) if self.manager_only("trace") => {
                self.state.selection.select_trace(&id, &self.catalog);
            }
            Action::SelectStage(id) if self.manager_only("stage") => {
                self.state.selection.stage = Some(id);
            }
            Action::SelectDepartment(department) if self.manager_only("department") => {
                self.state.selection.department = department;
            }
            Action::SelectRisk(index) if self.manager_only("risk") => {
                self.state.selection.risk = index;
            }
            Action::SelectDrift(_)
            | Action::SelectTrace(_)
            | Action::SelectStage(_)
            | Action::SelectDepartment(_)
            | Action::SelectRisk(_) => {}
            Action::SelectMemoryTab(tab) => self.state.selection.memory_tab = tab,
            Action::MoveSelection { forward } => self.move_selection(forward),
            Action::CycleTrace { forward } => {
                if role == Role::Manager {
                    let ids: Vec<&str> = self.catalog.workflows.iter().map(|w| w.id.as_str()).collect();
                    if let Some(id) = cycle_key(&ids, self.state.selection.trace.as_deref(), forward) {
                        let id = id.to_string();
                        self.state.selection.select_trace(&id, &self.catalog);
                    }
                }
            }

            Action::SetMemoryQuery(query) => self.state.filters.memory_query = query,
            Action::SetLogQuery(query) => self.state.filters.log_query = query,

            Action::TogglePanel(panel) => self.state.panels.toggle(panel),
            Action::SetPanel(panel, open) => self.state.panels.set(panel, open),

            Action::EditInput(text) => self.state.assistant.input = text,
            Action::PrefillDefaultQuestion => {
                if self.state.assistant.input.trim().is_empty() {
                    self.state.assistant.input = self.catalog.default_question.clone();
                }
            }
            Action::SetScenario(scenario) => self.state.assistant.scenario = scenario,
            Action::ToggleScenario => {
                self.state.assistant.scenario = self.state.assistant.scenario.toggled();
            }
            Action::Submit { text, scenario } => return self.submit(&text, scenario),
            Action::SubmitInput => {
                let text = self.state.assistant.input.clone();
                let scenario = Some(self.state.assistant.scenario);
                return self.submit(&text, scenario);
            }

            Action::MetricFrame {
                generation,
                slot,
                text,
            } => {
                if !self.state.metrics.apply_frame(generation, slot, text) {
                    debug!(generation, slot, "dropped stale metric frame");
                }
            }
            Action::ReplyReady { ticket, reply } => return self.deliver(ticket, reply),
        }
        Vec::new()
    }

    fn mount(&mut self) -> Vec<Command> {
        if self.state.mounted {
            return Vec::new();
        }
        self.state.mounted = true;

        let metrics = self.catalog.metrics_for(self.state.role());
        let Some(settings) = &self.options.animation else {
            self.state.metrics.settle(metrics);
            return Vec::new();
        };

        let generation = self.state.metrics.begin(metrics);
        let plans = plan_metrics(metrics, settings, &mut self.rng);
        debug!(generation, plans = plans.len(), "starting metric animation");
        vec![Command::StartAnimation { generation, plans }]
    }

    fn manager_only(&self, what: &str) -> bool {
        if self.state.role() == Role::Manager {
            return true;
        }
        debug!(what, "ignoring manager selection in employee view");
        false
    }

    fn move_selection(&mut self, forward: bool) {
        let selection = &mut self.state.selection;
        match self.state.nav.section {
            Section::SystemStatus => {
                let len = self.catalog.risks.len();
                if len > 0 {
                    let current = selection.risk.min(len - 1);
                    selection.risk = if forward {
                        (current + 1) % len
                    } else {
                        (current + len - 1) % len
                    };
                }
            }
            Section::StrategyTrace => {
                let keys = self.catalog.drift_keys();
                if let Some(key) = cycle_key(&keys, selection.drift.as_deref(), forward) {
                    selection.drift = Some(key.to_string());
                }
            }
            Section::WorkflowTraces => {
                let Some(trace) = selection
                    .trace
                    .as_deref()
                    .and_then(|id| self.catalog.workflow(id))
                else {
                    return;
                };
                let ids: Vec<&str> = trace.stages.iter().map(|s| s.id.as_str()).collect();
                if let Some(id) = cycle_key(&ids, selection.stage.as_deref(), forward) {
                    selection.stage = Some(id.to_string());
                }
            }
            Section::TeamPulse => {
                // "All" sits before the first department.
                let names = self.catalog.department_names();
                let position = selection
                    .department
                    .as_deref()
                    .and_then(|d| names.iter().position(|n| *n == d));
                let slots = names.len() + 1;
                let current = position.map(|p| p + 1).unwrap_or(0);
                let next = if forward {
                    (current + 1) % slots
                } else {
                    (current + slots - 1) % slots
                };
                selection.department = next.checked_sub(1).map(|i| names[i].to_string());
            }
            Section::MemoryRecall => {
                let tabs = MemoryTab::all_tabs();
                let current = tabs
                    .iter()
                    .position(|t| *t == selection.memory_tab)
                    .unwrap_or(0);
                let len = tabs.len();
                let next = if forward {
                    (current + 1) % len
                } else {
                    (current + len - 1) % len
                };
                selection.memory_tab = tabs[next];
            }
            Section::MyFocus | Section::StandupReport | Section::Settings => {}
        }
    }

    fn submit(&mut self, text: &str, scenario: Option<Scenario>) -> Vec<Command> {
        let role = self.state.role();
        let policy = self.options.busy_policy;
        let outcome = self.state.assistant.submit(text, role, scenario, policy);

        match outcome {
            SubmitOutcome::Rejected => {
                debug!("ignoring empty assistant submission");
                Vec::new()
            }
            SubmitOutcome::Ignored => {
                info!(%policy, "assistant busy, submission ignored");
                Vec::new()
            }
            SubmitOutcome::Queued => {
                self.state.panels.assistant_window = true;
                info!(queued = self.state.assistant.queued(), "assistant busy, submission queued");
                Vec::new()
            }
            SubmitOutcome::Scheduled(request) => {
                self.state.panels.assistant_window = true;
                info!(ticket = request.ticket, %role, scenario = ?request.scenario, "assistant thinking");
                vec![Command::ScheduleReply(request)]
            }
        }
    }

    fn deliver(&mut self, ticket: u64, reply: CannedReply) -> Vec<Command> {
        match self.state.assistant.deliver(ticket, reply) {
            DeliverOutcome::Discarded => {
                debug!(ticket, "discarding stale assistant reply");
                Vec::new()
            }
            DeliverOutcome::Delivered { next } => {
                info!(ticket, "assistant reply delivered");
                if self.state.role() == Role::Manager {
                    self.state.panels.ai_drawer = true;
                }
                next.map(Command::ScheduleReply).into_iter().collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{CannedResponder, ResponseProvider};
    use crate::state::AssistantPhase;
    use mohan_types::{ChatPayload, Sender};

    fn dashboard(role: Role) -> Dashboard {
        Dashboard::new(
            Catalog::builtin(),
            DashboardOptions {
                role,
                seed: Some(11),
                ..DashboardOptions::default()
            },
        )
    }

    /// Play the reply the runtime would produce for each scheduled request.
    fn answer(dash: &mut Dashboard, commands: Vec<Command>) {
        let responder = CannedResponder::instant(dash.catalog().canned.clone());
        let mut pending = commands;
        while let Some(command) = pending.pop() {
            if let Command::ScheduleReply(request) = command {
                let reply = responder.respond(&request);
                pending.extend(dash.update(Action::ReplyReady {
                    ticket: request.ticket,
                    reply,
                }));
            }
        }
    }

    #[test]
    fn test_mount_starts_animation_once() {
        let mut dash = dashboard(Role::Manager);
        let commands = dash.update(Action::Mount);
        match commands.as_slice() {
            [Command::StartAnimation { generation, plans }] => {
                assert_eq!(*generation, dash.state().metrics.generation());
                assert_eq!(plans.len(), 3);
            }
            other => panic!("unexpected commands {:?}", other),
        }
        assert!(dash.update(Action::Mount).is_empty());
    }

    #[test]
    fn test_replaying_plans_converges() {
        let mut dash = dashboard(Role::Manager);
        let commands = dash.update(Action::Mount);
        let Some(Command::StartAnimation { generation, plans }) = commands.into_iter().next() else {
            panic!("expected animation");
        };
        for plan in plans {
            for frame in plan.frames {
                dash.update(Action::MetricFrame {
                    generation,
                    slot: plan.slot,
                    text: frame.text,
                });
            }
        }
        assert_eq!(dash.state().metrics.slots(), &["14.2 Days", "62%", "340 Hours"]);
    }

    #[test]
    fn test_frames_after_unmount_do_not_mutate() {
        let mut dash = dashboard(Role::Manager);
        let Some(Command::StartAnimation { generation, plans }) =
            dash.update(Action::Mount).into_iter().next()
        else {
            panic!("expected animation");
        };
        dash.update(Action::MetricFrame {
            generation,
            slot: 0,
            text: plans[0].frames[0].text.clone(),
        });
        let before = dash.state().metrics.clone();

        assert_eq!(dash.update(Action::Unmount), vec![Command::CancelAnimation]);
        dash.update(Action::MetricFrame {
            generation,
            slot: 0,
            text: "999 Days".to_string(),
        });
        assert_eq!(dash.state().metrics.slots(), before.slots());
    }

    #[test]
    fn test_disabled_animation_shows_final_values() {
        let mut dash = Dashboard::new(
            Catalog::builtin(),
            DashboardOptions {
                animation: None,
                ..DashboardOptions::default()
            },
        );
        assert!(dash.update(Action::Mount).is_empty());
        assert_eq!(dash.state().metrics.slots(), &["14.2 Days", "62%", "340 Hours"]);
    }

    #[test]
    fn test_role_switch_resets_everything_section_local() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::SelectSection(Section::TeamPulse));
        dash.update(Action::SelectDepartment(Some("Sales".to_string())));
        dash.update(Action::TogglePanel(Panel::ProfileMenu));
        dash.update(Action::SetLogQuery("jenkins".to_string()));
        dash.update(Action::EditInput("draft".to_string()));
        let commands = dash.update(Action::SubmitInput);
        assert_eq!(commands.len(), 1);
        dash.update(Action::EditInput("unsent".to_string()));

        let commands = dash.update(Action::SwitchRole(Role::Employee));
        assert_eq!(commands, vec![Command::CancelAnimation]);

        let state = dash.state();
        assert_eq!(state.nav.section, Section::MyFocus);
        assert!(state.assistant.messages.is_empty());
        assert!(state.assistant.input.is_empty());
        assert_eq!(state.assistant.phase, AssistantPhase::Idle);
        assert!(!state.panels.assistant_window);
        assert!(!state.panels.profile_menu);
        assert!(state.filters.log_query.is_empty());
        assert_eq!(state.selection.department, None);
        assert_eq!(state.selection.drift, None);
        assert_eq!(state.metrics.slots(), &["4.5 Hours", "23 /day", "32%"]);
    }

    #[test]
    fn test_reply_after_role_switch_is_discarded() {
        let mut dash = dashboard(Role::Manager);
        let commands = dash.update(Action::Submit {
            text: "why?".to_string(),
            scenario: None,
        });
        dash.update(Action::SwitchRole(Role::Manager));
        answer(&mut dash, commands);
        assert!(dash.state().assistant.messages.is_empty());
        assert!(!dash.state().panels.ai_drawer);
    }

    #[test]
    fn test_manager_submit_yields_one_drift_alert() {
        let mut dash = dashboard(Role::Manager);
        let commands = dash.update(Action::Submit {
            text: "Why is alignment dropping?".to_string(),
            scenario: None,
        });
        assert!(dash.state().panels.assistant_window);
        assert!(dash.state().assistant.is_thinking());

        answer(&mut dash, commands);
        let state = dash.state();
        assert!(!state.assistant.is_thinking());
        assert!(state.panels.ai_drawer);

        let replies: Vec<_> = state
            .assistant
            .messages
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .collect();
        assert_eq!(replies.len(), 1);
        assert!(matches!(replies[0].payload, Some(ChatPayload::Analysis(_))));
    }

    #[test]
    fn test_employee_scenarios_select_payload() {
        let mut dash = dashboard(Role::Employee);
        let commands = dash.update(Action::Submit {
            text: "draft my standup".to_string(),
            scenario: Some(Scenario::Report),
        });
        answer(&mut dash, commands);
        let commands = dash.update(Action::Submit {
            text: "where did I see the staging fix?".to_string(),
            scenario: None,
        });
        answer(&mut dash, commands);

        let kinds: Vec<&str> = dash
            .state()
            .assistant
            .messages
            .iter()
            .filter_map(|m| m.payload.as_ref().map(|p| p.kind()))
            .collect();
        assert_eq!(kinds, vec!["report", "memory"]);
        assert!(!dash.state().panels.ai_drawer);
    }

    #[test]
    fn test_submit_input_uses_scenario_toggle() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::ToggleScenario);
        dash.update(Action::EditInput("standup please".to_string()));
        let commands = dash.update(Action::SubmitInput);
        match commands.as_slice() {
            [Command::ScheduleReply(req)] => assert_eq!(req.scenario, Some(Scenario::Report)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_prefill_only_fills_empty_input() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::PrefillDefaultQuestion);
        assert_eq!(
            dash.state().assistant.input,
            "Why is our Q3 Strategic Alignment dropping?"
        );
        dash.update(Action::EditInput("mine".to_string()));
        dash.update(Action::PrefillDefaultQuestion);
        assert_eq!(dash.state().assistant.input, "mine");
    }

    #[test]
    fn test_empty_submit_has_no_effect() {
        let mut dash = dashboard(Role::Manager);
        assert!(dash.update(Action::SubmitInput).is_empty());
        assert!(!dash.state().panels.assistant_window);
        assert!(dash.state().assistant.messages.is_empty());
    }

    #[test]
    fn test_employee_ignores_manager_selections() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectDrift("eng_drift".to_string()));
        dash.update(Action::SelectTrace("wf-ticket-merge".to_string()));
        assert_eq!(dash.state().selection.drift, None);
        assert_eq!(dash.state().selection.trace, None);
    }

    #[test]
    fn test_move_selection_per_section() {
        let mut dash = dashboard(Role::Manager);

        dash.update(Action::MoveSelection { forward: false });
        assert_eq!(dash.state().selection.risk, 2);

        dash.update(Action::SelectSection(Section::StrategyTrace));
        dash.update(Action::MoveSelection { forward: true });
        assert_eq!(dash.state().selection.drift.as_deref(), Some("sales_drift"));

        dash.update(Action::SelectSection(Section::WorkflowTraces));
        dash.update(Action::MoveSelection { forward: true });
        assert_eq!(dash.state().selection.stage.as_deref(), Some("s5"));

        dash.update(Action::SelectSection(Section::TeamPulse));
        dash.update(Action::MoveSelection { forward: false });
        assert_eq!(dash.state().selection.department, None);
        dash.update(Action::MoveSelection { forward: false });
        assert_eq!(
            dash.state().selection.department.as_deref(),
            Some("Customer Success")
        );
    }

    #[test]
    fn test_cycle_trace_resets_stage() {
        let mut dash = dashboard(Role::Manager);
        dash.update(Action::CycleTrace { forward: true });
        assert_eq!(
            dash.state().selection.trace.as_deref(),
            Some("wf-lead-contract")
        );
        assert_eq!(dash.state().selection.stage.as_deref(), Some("l2"));
    }

    #[test]
    fn test_foreign_section_is_ignored() {
        let mut dash = dashboard(Role::Employee);
        dash.update(Action::SelectSection(Section::StrategyTrace));
        assert_eq!(dash.state().nav.section, Section::MyFocus);
    }
}
