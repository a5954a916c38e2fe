use crate::sprite::SpriteImage;
use pokedex_types::{StatBar, TypeBadge};

/// Everything the interactive record card draws, one slot per field.
#[derive(Debug, Clone)]
pub struct RecordScreen {
    pub image: ImageSlot,
    /// `#025`
    pub id_badge: String,
    pub name: String,
    pub types: Vec<TypeBadge>,
    pub stats: Vec<StatBar>,
    /// Row-major 2×2 grid: height, weight, abilities, hidden ability
    pub info: [InfoCard; 4],
}

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Sprite(SpriteImage),
    Placeholder,
}

impl ImageSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSlot::Placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub label: &'static str,
    pub value: String,
}
