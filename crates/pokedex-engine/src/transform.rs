use crate::palette::{stat_tier, tier_color, type_color};
use crate::text::{humanize, title_case};
use crate::units::{height_from_decimeters, weight_from_hectograms};
use pokedex_types::{
    AbilityPartition, DisplayRecord, MAX_BASE_STAT, RawAbility, RawRecord, RawStat, StatBar,
    TypeBadge,
};

/// Derive every display value from a validated record.
pub fn transform(raw: RawRecord) -> DisplayRecord {
    DisplayRecord {
        id: raw.id,
        id_badge: format!("{:03}", raw.id),
        name: title_case(&raw.name),
        types: raw
            .types
            .iter()
            .map(|name| TypeBadge {
                name: title_case(name),
                color: type_color(name),
            })
            .collect(),
        stats: raw.stats.iter().map(stat_bar).collect(),
        abilities: partition_abilities(&raw.abilities),
        height: height_from_decimeters(raw.height),
        weight: weight_from_hectograms(raw.weight),
        sprite_url: raw.sprite_url,
    }
}

fn stat_bar(stat: &RawStat) -> StatBar {
    let tier = stat_tier(stat.base_value);
    StatBar {
        label: stat_label(&stat.name),
        value: stat.base_value,
        fill_ratio: fill_ratio(stat.base_value),
        tier,
        color: tier_color(tier),
    }
}

pub fn fill_ratio(value: u16) -> f64 {
    (f64::from(value) / f64::from(MAX_BASE_STAT)).clamp(0.0, 1.0)
}

/// Short label for a stat slug.
pub fn stat_label(stat_name: &str) -> String {
    match stat_name.trim().to_ascii_lowercase().as_str() {
        "hp" => "HP".to_string(),
        "attack" => "Attack".to_string(),
        "defense" => "Defense".to_string(),
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        "speed" => "Speed".to_string(),
        other => {
            let label = humanize(other);
            if label == "Hp" { "HP".to_string() } else { label }
        }
    }
}

fn partition_abilities(abilities: &[RawAbility]) -> AbilityPartition {
    let (hidden, regular): (Vec<&RawAbility>, Vec<&RawAbility>) =
        abilities.iter().partition(|a| a.is_hidden);

    AbilityPartition {
        regular: regular.into_iter().map(|a| humanize(&a.name)).collect(),
        hidden: hidden.into_iter().map(|a| humanize(&a.name)).collect(),
    }
}
