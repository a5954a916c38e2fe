use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::Notice;

use super::notice_level_to_color;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 8;

/// Centered modal drawn over whatever is already on screen.
pub struct NoticeModal<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [row] = Layout::vertical([Constraint::Length(MODAL_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [modal] = Layout::horizontal([Constraint::Length(MODAL_WIDTH)])
            .flex(Flex::Center)
            .areas(row);

        let color = notice_level_to_color(self.notice.level);
        let block = Block::bordered()
            .title(format!(" {} ", self.notice.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(color));

        let mut lines = vec![Line::from(self.notice.message.as_str())];
        if let Some(hint) = &self.notice.hint {
            lines.push(Line::default());
            lines.push(Line::styled(hint.as_str(), Style::default().fg(Color::Gray)));
        }
        lines.push(Line::default());
        lines.push(Line::styled("[Esc] dismiss", Style::default().fg(Color::DarkGray)).centered());

        Clear.render(modal, buf);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal, buf);
    }
}
