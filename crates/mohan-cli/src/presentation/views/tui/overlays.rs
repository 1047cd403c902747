use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{DrawerViewModel, Lookup, ProfileMenuViewModel};

/// Side drawer with the latest analysis card.
pub struct DrawerView<'a> {
    model: &'a DrawerViewModel,
}

impl<'a> DrawerView<'a> {
    pub fn new(model: &'a DrawerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DrawerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .title(format!(" {} ", self.model.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let lines = match &self.model.analysis {
            Lookup::Found(a) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Summary",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(a.summary.as_str()),
                    Line::default(),
                ];
                for item in &a.evidence {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", item.icon, item.title),
                        Style::default().fg(Color::Cyan),
                    )));
                    lines.push(Line::from(Span::styled(
                        item.value.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(item.description.as_str()));
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    "Recommendation",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(a.recommendation.as_str()));
                lines
            }
            Lookup::Missing(p) => vec![Line::from(Span::styled(
                p.message.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

pub struct ProfileMenuView<'a> {
    model: &'a ProfileMenuViewModel,
}

impl<'a> ProfileMenuView<'a> {
    pub fn new(model: &'a ProfileMenuViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileMenuView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let lines = vec![
            Line::from(Span::styled(
                self.model.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.model.title.as_str()),
            Line::from(Span::styled(
                self.model.org.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
            Line::from(format!("Viewing as {}", self.model.current_role)),
            Line::from(vec![
                Span::styled("[r] ", Style::default().fg(Color::Yellow)),
                Span::raw(self.model.switch_label.as_str()),
            ]),
        ];
        Paragraph::new(lines)
            .block(Block::default().title(" Profile ").borders(Borders::ALL))
            .render(area, buf);
    }
}
