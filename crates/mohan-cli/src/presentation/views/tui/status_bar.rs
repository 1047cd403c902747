//! Bottom status line: assistant state on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    /// Shown instead of the model's message while a prompt is active.
    prompt: Option<&'a str>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self {
            model,
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: Option<&'a str>) -> Self {
        self.prompt = prompt;
        self
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(inner);

        let status = match self.prompt {
            Some(prompt) => Line::from(Span::styled(prompt, Style::default().fg(Color::Yellow))),
            None => Line::from(Span::styled(
                self.model.message.as_str(),
                Style::default().fg(status_level_to_color(self.model.level)),
            )),
        };
        Paragraph::new(status).render(chunks[0], buf);

        let mut spans = Vec::new();
        for hint in &self.model.hints {
            spans.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!("{} ", hint.label)));
        }
        Paragraph::new(Line::from(spans).right_aligned()).render(chunks[1], buf);
    }
}
