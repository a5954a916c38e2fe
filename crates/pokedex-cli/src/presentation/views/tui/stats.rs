use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use pokedex_types::StatBar;

use super::rgb_to_color;

const LABEL_WIDTH: u16 = 9;
const VALUE_WIDTH: u16 = 5;

/// Number of track cells to fill for `ratio` on a track `width` cells wide.
pub fn filled_cells(ratio: f64, width: u16) -> u16 {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (ratio * f64::from(width)).round() as u16
}

pub struct StatsView<'a> {
    stats: &'a [StatBar],
}

impl<'a> StatsView<'a> {
    pub fn new(stats: &'a [StatBar]) -> Self {
        Self { stats }
    }
}

impl Widget for StatsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(" Base Stats ");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical(self.stats.iter().map(|_| Constraint::Length(1))).split(inner);

        for (stat, row) in self.stats.iter().zip(rows.iter()) {
            let [label_area, value_area, track_area] = Layout::horizontal([
                Constraint::Length(LABEL_WIDTH),
                Constraint::Length(VALUE_WIDTH),
                Constraint::Min(0),
            ])
            .areas(*row);

            Paragraph::new(stat.label.as_str())
                .style(Style::default().fg(Color::Gray))
                .render(label_area, buf);
            Paragraph::new(format!("{:>3}", stat.value)).render(value_area, buf);

            let filled = filled_cells(stat.fill_ratio, track_area.width);
            let empty = track_area.width.saturating_sub(filled);
            let track = Line::from(vec![
                Span::styled(
                    "█".repeat(usize::from(filled)),
                    Style::default().fg(rgb_to_color(stat.color)),
                ),
                Span::styled(
                    "░".repeat(usize::from(empty)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            Paragraph::new(track).render(track_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{render, row_text};
    use pokedex_types::{Rgb, StatTier};

    #[test]
    fn test_filled_cells_rounds() {
        assert_eq!(filled_cells(35.0 / 255.0, 40), 5);
        assert_eq!(filled_cells(1.0, 40), 40);
        assert_eq!(filled_cells(0.0, 40), 0);
    }

    #[test]
    fn test_filled_cells_clamps() {
        assert_eq!(filled_cells(1.5, 10), 10);
        assert_eq!(filled_cells(-0.2, 10), 0);
        assert_eq!(filled_cells(f64::NAN, 10), 0);
    }

    #[test]
    fn test_bar_length_tracks_ratio() {
        let stats = [StatBar {
            label: "Speed".to_string(),
            value: 255,
            fill_ratio: 1.0,
            tier: StatTier::Exceptional,
            color: Rgb::from_hex(0x10B981),
        }];
        // 2 border + 9 label + 5 value + 10 track
        let buf = render(StatsView::new(&stats), 26, 3);
        let row = row_text(&buf, 1);
        assert!(row.contains("Speed"));
        assert!(row.contains("255"));
        assert_eq!(row.matches('█').count(), 10);
    }
}
