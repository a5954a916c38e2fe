use crate::presentation::formatters::{format_height, format_weight, join_or_none};
use crate::presentation::view_models::{ImageSlot, InfoCard, RecordScreen};
use crate::sprite::SpriteImage;
use pokedex_types::DisplayRecord;

pub fn build_screen(record: &DisplayRecord, sprite: Option<SpriteImage>) -> RecordScreen {
    let image = match sprite {
        Some(sprite) => ImageSlot::Sprite(sprite),
        None => ImageSlot::Placeholder,
    };

    RecordScreen {
        image,
        id_badge: format!("#{}", record.id_badge),
        name: record.name.clone(),
        types: record.types.clone(),
        stats: record.stats.clone(),
        info: [
            InfoCard {
                label: "Height",
                value: format_height(&record.height),
            },
            InfoCard {
                label: "Weight",
                value: format_weight(&record.weight),
            },
            InfoCard {
                label: "Abilities",
                value: join_or_none(&record.abilities.regular),
            },
            InfoCard {
                label: "Hidden Ability",
                value: join_or_none(&record.abilities.hidden),
            },
        ],
    }
}
