//! Interactive dashboard renderer.
//!
//! The renderer owns terminal and scroll state only. Every frame is built from
//! a fresh `ScreenViewModel` presented off the runtime's state, and every key
//! goes back to the runtime as engine actions.

pub mod keymap;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mohan_runtime::DashboardRuntime;
use mohan_types::Section;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tracing::debug;

use self::keymap::{InputMode, map_key};
use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::{
    AssistantView, DrawerView, HeaderView, NavigationView, ProfileMenuView, SectionView,
    StatusBarView, centered_rect,
};

const PAGE: u16 = 10;

pub struct TuiRenderer {
    tick_rate: Duration,
    mode: InputMode,
    /// UI State: body scroll offset, reset when the section changes
    scroll: u16,
    last_section: Option<Section>,
}

impl TuiRenderer {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            mode: InputMode::Normal,
            scroll: 0,
            last_section: None,
        }
    }

    pub fn run(mut self, runtime: &mut DashboardRuntime) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, runtime);

        runtime.unmount();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        runtime: &mut DashboardRuntime,
    ) -> Result<()> {
        loop {
            runtime.drain();

            let section = runtime.state().nav.section;
            if self.last_section != Some(section) {
                self.scroll = 0;
                self.last_section = Some(section);
            }

            let screen = present_screen(runtime.state(), runtime.catalog());
            terminal.draw(|f| self.render(f, &screen))?;

            if !event::poll(self.tick_rate)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if self.scroll_key(key) {
                continue;
            }

            let outcome = map_key(key, self.mode, runtime.state());
            if outcome.quit {
                debug!("quit requested");
                break;
            }
            self.mode = outcome.mode;
            for action in outcome.actions {
                runtime.dispatch(action);
            }
        }

        Ok(())
    }

    /// Body scrolling never touches the engine.
    fn scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::Home if self.mode == InputMode::Normal => self.scroll = 0,
            _ => return false,
        }
        true
    }

    fn prompt(&self) -> Option<&'static str> {
        match self.mode {
            InputMode::Normal => None,
            InputMode::Compose => Some("Compose: Enter send, Ctrl-D suggested question, Esc done"),
            InputMode::Search => Some("Search: type to filter, Enter or Esc done"),
        }
    }

    fn render(&self, f: &mut Frame, screen: &ScreenViewModel) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.area());

        f.render_widget(HeaderView::new(&screen.header), rows[0]);
        f.render_widget(NavigationView::new(&screen.navigation), rows[1]);

        let body = rows[2];
        match &screen.drawer {
            Some(drawer) => {
                let cols = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(body);
                f.render_widget(
                    SectionView::new(&screen.section, &screen.header.title).scroll(self.scroll),
                    cols[0],
                );
                f.render_widget(DrawerView::new(drawer), cols[1]);
            }
            None => f.render_widget(
                SectionView::new(&screen.section, &screen.header.title).scroll(self.scroll),
                body,
            ),
        }

        f.render_widget(
            StatusBarView::new(&screen.status_bar).with_prompt(self.prompt()),
            rows[3],
        );

        if screen.assistant.open {
            f.render_widget(
                AssistantView::new(&screen.assistant).composing(self.mode == InputMode::Compose),
                centered_rect(70, 70, body),
            );
        }

        if let Some(menu) = &screen.profile_menu {
            f.render_widget(ProfileMenuView::new(menu), centered_rect(40, 40, f.area()));
        }
    }
}
