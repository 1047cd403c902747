use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Slide-in drawer with the full AI analysis.
    AiDrawer,
    /// Floating assistant chat window.
    AssistantWindow,
    ProfileMenu,
    /// Inline explanation over the drift slice of the capacity gap bar.
    DriftExplanation,
}

/// Independent visibility flags; opening one never closes another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PanelState {
    pub ai_drawer: bool,
    pub assistant_window: bool,
    pub profile_menu: bool,
    pub drift_explanation: bool,
}

impl PanelState {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::AiDrawer => self.ai_drawer,
            Panel::AssistantWindow => self.assistant_window,
            Panel::ProfileMenu => self.profile_menu,
            Panel::DriftExplanation => self.drift_explanation,
        }
    }

    pub fn set(&mut self, panel: Panel, open: bool) {
        let flag = match panel {
            Panel::AiDrawer => &mut self.ai_drawer,
            Panel::AssistantWindow => &mut self.assistant_window,
            Panel::ProfileMenu => &mut self.profile_menu,
            Panel::DriftExplanation => &mut self.drift_explanation,
        };
        *flag = open;
    }

    pub fn toggle(&mut self, panel: Panel) {
        self.set(panel, !self.is_open(panel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_are_independent() {
        let mut panels = PanelState::default();
        panels.toggle(Panel::AiDrawer);
        panels.toggle(Panel::ProfileMenu);
        assert!(panels.ai_drawer);
        assert!(panels.profile_menu);
        assert!(!panels.assistant_window);

        panels.toggle(Panel::AiDrawer);
        assert!(!panels.ai_drawer);
        assert!(panels.profile_menu);
    }
}
