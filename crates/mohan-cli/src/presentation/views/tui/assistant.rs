//! Floating assistant chat window.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{
    AssistantPanelViewModel, ChatMessageViewModel, PayloadViewModel,
};
use crate::presentation::views::assistant::sender_label;

pub struct AssistantView<'a> {
    model: &'a AssistantPanelViewModel,
    composing: bool,
}

impl<'a> AssistantView<'a> {
    pub fn new(model: &'a AssistantPanelViewModel) -> Self {
        Self {
            model,
            composing: false,
        }
    }

    /// Highlight the input line while keys go to it.
    pub fn composing(mut self, composing: bool) -> Self {
        self.composing = composing;
        self
    }
}

fn payload_lines(payload: &PayloadViewModel) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    match payload {
        PayloadViewModel::Analysis(a) => {
            let mut lines = vec![Line::from(Span::styled(
                "  Analysis attached, see drawer [d]".to_string(),
                dim,
            ))];
            for item in &a.evidence {
                lines.push(Line::from(format!("  {} {}", item.icon, item.title)));
            }
            lines
        }
        PayloadViewModel::Report(r) => {
            let mut lines = vec![Line::from(Span::styled(
                format!("  {} · {}", r.title, r.date_label),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            for section in &r.sections {
                lines.push(Line::from(format!("  {}", section.heading)));
                for bullet in &section.bullets {
                    lines.push(Line::from(format!("    • {}", bullet)));
                }
            }
            lines
        }
        PayloadViewModel::Memory(m) => {
            let mut lines = vec![Line::from(format!("  {}", m.summary))];
            for a in &m.attachments {
                lines.push(Line::from(vec![
                    Span::styled(format!("  ▤ {}", a.title), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  {} · {}", a.app, a.timestamp), dim),
                ]));
            }
            lines
        }
    }
}

fn message_lines(message: &ChatMessageViewModel) -> Vec<Line<'static>> {
    let color = if message.sender == "user" {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", message.time),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Span::styled(
            format!("{}: ", sender_label(&message.sender)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message.content.clone()),
    ])];
    if let Some(payload) = &message.payload {
        lines.extend(payload_lines(payload));
    }
    lines
}

impl<'a> Widget for AssistantView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title = match &self.model.scenario {
            Some(scenario) => format!(" Mohan AI · {} [s] ", scenario),
            None => " Mohan AI ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(inner);

        let mut lines: Vec<Line> = self.model.messages.iter().flat_map(message_lines).collect();
        if self.model.thinking {
            lines.push(Line::from(Span::styled(
                "Mohan AI is analyzing screen context...",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        if self.model.queued > 0 {
            lines.push(Line::from(format!("{} more queued", self.model.queued)));
        }
        // Keep the newest messages in view.
        let height = chunks[0].height as usize;
        let skip = lines.len().saturating_sub(height) as u16;
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((skip, 0))
            .render(chunks[0], buf);

        let input_style = if self.composing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = if self.model.input.is_empty() {
            Line::from(Span::styled(
                self.model.placeholder.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.model.input.as_str())
        };
        Paragraph::new(input)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(input_style)
                    .title(if self.composing { " Enter to send " } else { " [i] type " }),
            )
            .render(chunks[1], buf);
    }
}
