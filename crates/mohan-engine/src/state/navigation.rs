use mohan_types::{Role, Section};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub role: Role,
    pub section: Section,
}

impl NavigationState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            section: role.home_section(),
        }
    }

    /// Returns false (and leaves the section alone) for a section the role doesn't have.
    pub fn select(&mut self, section: Section) -> bool {
        if !self.role.has_section(section) {
            return false;
        }
        self.section = section;
        true
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    pub fn section_index(&self) -> usize {
        self.role
            .sections()
            .iter()
            .position(|s| *s == self.section)
            .unwrap_or(0)
    }

    fn step(&mut self, delta: isize) {
        let sections = self.role.sections();
        let len = sections.len() as isize;
        let idx = (self.section_index() as isize + delta).rem_euclid(len);
        self.section = sections[idx as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home_section() {
        let nav = NavigationState::new(Role::Employee);
        assert_eq!(nav.section, Section::MyFocus);
    }

    #[test]
    fn test_select_rejects_foreign_section() {
        let mut nav = NavigationState::new(Role::Employee);
        assert!(!nav.select(Section::StrategyTrace));
        assert_eq!(nav.section, Section::MyFocus);
        assert!(nav.select(Section::StandupReport));
        assert_eq!(nav.section, Section::StandupReport);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut nav = NavigationState::new(Role::Manager);
        nav.previous();
        assert_eq!(nav.section, Section::Settings);
        nav.next();
        assert_eq!(nav.section, Section::SystemStatus);
        nav.next();
        assert_eq!(nav.section, Section::StrategyTrace);
    }
}
