use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use crate::presentation::view_models::{HeaderViewModel, NavigationViewModel};

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(36)]).split(area);

        let left = Line::from(vec![
            Span::styled(
                format!("{} ", self.model.org),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(self.model.breadcrumb.as_str()),
        ]);
        Paragraph::new(left).render(chunks[0], buf);

        let right = Line::from(vec![
            Span::styled(
                format!("[{}] ", self.model.avatar),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw(self.model.user_name.as_str()),
            Span::styled(
                format!(" ({})", self.model.user_title),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
        .right_aligned();
        Paragraph::new(right).render(chunks[1], buf);
    }
}

pub struct NavigationView<'a> {
    model: &'a NavigationViewModel,
}

impl<'a> NavigationView<'a> {
    pub fn new(model: &'a NavigationViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavigationView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .items
            .iter()
            .map(|item| Line::from(format!("{} {}", item.shortcut, item.title)))
            .collect();
        let selected = self.model.items.iter().position(|i| i.active).unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(format!("{} view", self.model.role)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}
