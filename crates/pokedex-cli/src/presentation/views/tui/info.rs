use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::InfoCard;

/// The 2×2 physical-info grid, filled row by row.
pub struct InfoGridView<'a> {
    cards: &'a [InfoCard; 4],
}

impl<'a> InfoGridView<'a> {
    pub fn new(cards: &'a [InfoCard; 4]) -> Self {
        Self { cards }
    }
}

impl Widget for InfoGridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, bottom] = Layout::vertical([Constraint::Ratio(1, 2); 2]).areas(area);
        let halves = |row: Rect| -> [Rect; 2] {
            Layout::horizontal([Constraint::Ratio(1, 2); 2]).areas(row)
        };

        let [top_left, top_right] = halves(top);
        let [bottom_left, bottom_right] = halves(bottom);
        let slots = [top_left, top_right, bottom_left, bottom_right];

        for (card, slot) in self.cards.iter().zip(slots) {
            let block = Block::bordered()
                .title(format!(" {} ", card.label))
                .border_style(Style::default().fg(Color::DarkGray));
            Paragraph::new(card.value.as_str())
                .wrap(Wrap { trim: true })
                .block(block)
                .render(slot, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{all_text, render};

    #[test]
    fn test_every_card_is_drawn() {
        let cards = [
            InfoCard {
                label: "Height",
                value: "0.4m (1'04\")".to_string(),
            },
            InfoCard {
                label: "Weight",
                value: "6.0kg (13.2 lbs)".to_string(),
            },
            InfoCard {
                label: "Abilities",
                value: "Static".to_string(),
            },
            InfoCard {
                label: "Hidden Ability",
                value: "None".to_string(),
            },
        ];
        let text = all_text(&render(InfoGridView::new(&cards), 60, 8));
        for card in &cards {
            assert!(text.contains(card.label), "missing {}", card.label);
            assert!(text.contains(&card.value), "missing {}", card.value);
        }
    }
}
