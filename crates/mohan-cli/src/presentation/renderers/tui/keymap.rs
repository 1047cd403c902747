//! Key bindings for the interactive dashboard.
//!
//! Mapping is a pure function of the key, the input mode and the current
//! state so it can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mohan_engine::{Action, DashboardState, Panel};
use mohan_types::{Role, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keys edit the assistant input.
    Compose,
    /// Keys edit the search field of the current section.
    Search,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    pub actions: Vec<Action>,
    pub mode: InputMode,
    pub quit: bool,
}

impl KeyOutcome {
    fn stay(mode: InputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    fn act(mode: InputMode, actions: Vec<Action>) -> Self {
        Self {
            actions,
            mode,
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }
}

pub fn map_key(key: KeyEvent, mode: InputMode, state: &DashboardState) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::quit();
    }
    match mode {
        InputMode::Normal => normal(key, state),
        InputMode::Compose => compose(key, state),
        InputMode::Search => search(key, state),
    }
}

/// Whether `/` opens a search field on this section.
pub fn searchable(section: Section) -> bool {
    matches!(section, Section::MemoryRecall | Section::WorkflowTraces)
}

fn normal(key: KeyEvent, state: &DashboardState) -> KeyOutcome {
    use InputMode::Normal;

    let role = state.role();
    let section = state.nav.section;
    let single = |action: Action| KeyOutcome::act(Normal, vec![action]);

    match key.code {
        KeyCode::Char('q') => KeyOutcome::quit(),
        KeyCode::Esc => close_topmost(state).map_or_else(KeyOutcome::quit, single),
        KeyCode::Tab => single(Action::NextSection),
        KeyCode::BackTab => single(Action::PreviousSection),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            match role.sections().get(idx) {
                Some(target) => single(Action::SelectSection(*target)),
                None => KeyOutcome::stay(Normal),
            }
        }
        KeyCode::Char('r') => single(Action::SwitchRole(role.other())),
        KeyCode::Char('j') | KeyCode::Down => single(Action::MoveSelection { forward: true }),
        KeyCode::Char('k') | KeyCode::Up => single(Action::MoveSelection { forward: false }),
        KeyCode::Char(']') => single(Action::CycleTrace { forward: true }),
        KeyCode::Char('[') => single(Action::CycleTrace { forward: false }),
        KeyCode::Enter => match section {
            Section::SystemStatus => single(Action::TogglePanel(Panel::DriftExplanation)),
            Section::StrategyTrace => single(Action::TogglePanel(Panel::AiDrawer)),
            Section::WorkflowTraces => single(Action::CycleTrace { forward: true }),
            Section::TeamPulse => single(Action::SelectDepartment(None)),
            _ => KeyOutcome::stay(Normal),
        },
        KeyCode::Char('i') => KeyOutcome::act(
            InputMode::Compose,
            vec![Action::SetPanel(Panel::AssistantWindow, true)],
        ),
        KeyCode::Char('s') if role == Role::Employee => single(Action::ToggleScenario),
        KeyCode::Char('a') => single(Action::TogglePanel(Panel::AssistantWindow)),
        KeyCode::Char('d') => single(Action::TogglePanel(Panel::AiDrawer)),
        KeyCode::Char('p') => single(Action::TogglePanel(Panel::ProfileMenu)),
        KeyCode::Char('h') => single(Action::TogglePanel(Panel::DriftExplanation)),
        KeyCode::Char('/') if searchable(section) => KeyOutcome::stay(InputMode::Search),
        _ => KeyOutcome::stay(Normal),
    }
}

/// Esc closes overlays one at a time before it quits.
fn close_topmost(state: &DashboardState) -> Option<Action> {
    [
        Panel::ProfileMenu,
        Panel::AssistantWindow,
        Panel::AiDrawer,
        Panel::DriftExplanation,
    ]
    .into_iter()
    .find(|panel| state.panels.is_open(*panel))
    .map(|panel| Action::SetPanel(panel, false))
}

/// Ctrl/Alt combinations are commands, never text.
fn is_chord(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn compose(key: KeyEvent, state: &DashboardState) -> KeyOutcome {
    use InputMode::Compose;

    let input = &state.assistant.input;
    match key.code {
        KeyCode::Esc => KeyOutcome::stay(InputMode::Normal),
        KeyCode::Enter => KeyOutcome::act(Compose, vec![Action::SubmitInput]),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::act(Compose, vec![Action::PrefillDefaultQuestion])
        }
        KeyCode::Backspace => {
            let mut text = input.clone();
            text.pop();
            KeyOutcome::act(Compose, vec![Action::EditInput(text)])
        }
        KeyCode::Char(c) if !is_chord(key) => {
            KeyOutcome::act(Compose, vec![Action::EditInput(format!("{}{}", input, c))])
        }
        _ => KeyOutcome::stay(Compose),
    }
}

fn search(key: KeyEvent, state: &DashboardState) -> KeyOutcome {
    use InputMode::Search;

    let (current, make): (&str, fn(String) -> Action) = match state.nav.section {
        Section::MemoryRecall => (state.filters.memory_query.as_str(), Action::SetMemoryQuery),
        Section::WorkflowTraces => (state.filters.log_query.as_str(), Action::SetLogQuery),
        _ => return KeyOutcome::stay(InputMode::Normal),
    };

    match key.code {
        KeyCode::Esc | KeyCode::Enter => KeyOutcome::stay(InputMode::Normal),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop();
            KeyOutcome::act(Search, vec![make(text)])
        }
        KeyCode::Char(c) if !is_chord(key) => {
            KeyOutcome::act(Search, vec![make(format!("{}{}", current, c))])
        }
        _ => KeyOutcome::stay(Search),
    }
}
