use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Widget},
};

use crate::presentation::view_models::ImageSlot;

/// Alpha at or below this draws as terminal background.
const TRANSPARENT_ALPHA: u8 = 16;
const UPPER_HALF: char = '▀';

/// Draws the sprite with two pixels per cell: the upper half block takes the
/// top pixel as foreground and the bottom pixel as background.
pub struct SpriteView<'a> {
    slot: &'a ImageSlot,
}

impl<'a> SpriteView<'a> {
    pub fn new(slot: &'a ImageSlot) -> Self {
        Self { slot }
    }
}

fn pixel_color(pixel: &image::Rgba<u8>) -> Option<Color> {
    let [r, g, b, a] = pixel.0;
    (a > TRANSPARENT_ALPHA).then_some(Color::Rgb(r, g, b))
}

impl Widget for SpriteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let sprite = match self.slot {
            ImageSlot::Sprite(sprite) => sprite,
            ImageSlot::Placeholder => {
                let [middle] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(inner);
                Paragraph::new("?")
                    .centered()
                    .style(Style::default().fg(Color::DarkGray))
                    .render(middle, buf);
                return;
            }
        };

        let fitted = sprite.fit(u32::from(inner.width), u32::from(inner.height) * 2);
        let cols = fitted.width() as u16;
        let rows = fitted.height().div_ceil(2) as u16;
        let left = inner.x + inner.width.saturating_sub(cols) / 2;
        let top = inner.y + inner.height.saturating_sub(rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let upper = pixel_color(fitted.get_pixel(u32::from(col), u32::from(row) * 2));
                let lower_y = u32::from(row) * 2 + 1;
                let lower = if lower_y < fitted.height() {
                    pixel_color(fitted.get_pixel(u32::from(col), lower_y))
                } else {
                    None
                };
                if upper.is_none() && lower.is_none() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((left + col, top + row)) {
                    cell.set_char(UPPER_HALF)
                        .set_fg(upper.unwrap_or(Color::Reset))
                        .set_bg(lower.unwrap_or(Color::Reset));
                }
            }
        }
    }
}
