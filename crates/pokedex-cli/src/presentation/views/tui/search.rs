use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Single-line text entry with a busy marker while a lookup is in flight.
pub struct SearchBarView<'a> {
    input: &'a str,
    pending: bool,
}

impl<'a> SearchBarView<'a> {
    pub fn new(input: &'a str, pending: bool) -> Self {
        Self { input, pending }
    }
}

impl Widget for SearchBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered().title(" Search by name or ID ");
        if self.pending {
            block = block.title(
                Line::from(Span::styled(" Searching… ", Style::default().fg(Color::Cyan)))
                    .right_aligned(),
            );
        }

        let line = Line::from(vec![
            Span::raw(self.input),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]);
        Paragraph::new(line).block(block).render(area, buf);
    }
}
