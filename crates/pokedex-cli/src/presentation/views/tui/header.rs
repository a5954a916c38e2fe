use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::RecordScreen;

use super::rgb_to_color;

/// Id badge, name heading, and the row of type badges.
pub struct HeaderView<'a> {
    screen: &'a RecordScreen,
}

impl<'a> HeaderView<'a> {
    pub fn new(screen: &'a RecordScreen) -> Self {
        Self { screen }
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Line::from(vec![
            Span::styled(
                self.screen.id_badge.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(
                self.screen.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let mut badges = Vec::with_capacity(self.screen.types.len() * 2);
        for badge in &self.screen.types {
            badges.push(Span::styled(
                format!(" {} ", badge.name),
                Style::default()
                    .fg(Color::White)
                    .bg(rgb_to_color(badge.color))
                    .add_modifier(Modifier::BOLD),
            ));
            badges.push(Span::raw(" "));
        }

        Paragraph::new(vec![heading, Line::default(), Line::from(badges)]).render(area, buf);
    }
}
