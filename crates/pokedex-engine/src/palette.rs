use pokedex_types::{Rgb, StatTier};

/// Fallback for type names the palette does not know yet
pub const DEFAULT_TYPE_COLOR: Rgb = Rgb::from_hex(0x999999);

/// One color per elemental type.
pub const TYPE_PALETTE: [(&str, Rgb); 18] = [
    ("normal", Rgb::from_hex(0xA8A878)),
    ("fire", Rgb::from_hex(0xF08030)),
    ("water", Rgb::from_hex(0x6890F0)),
    ("electric", Rgb::from_hex(0xF8D030)),
    ("grass", Rgb::from_hex(0x78C850)),
    ("ice", Rgb::from_hex(0x98D8D8)),
    ("fighting", Rgb::from_hex(0xC03028)),
    ("poison", Rgb::from_hex(0xA040A0)),
    ("ground", Rgb::from_hex(0xE0C068)),
    ("flying", Rgb::from_hex(0xA890F0)),
    ("psychic", Rgb::from_hex(0xF85888)),
    ("bug", Rgb::from_hex(0xA8B820)),
    ("rock", Rgb::from_hex(0xB8A038)),
    ("ghost", Rgb::from_hex(0x705898)),
    ("dragon", Rgb::from_hex(0x7038F8)),
    ("dark", Rgb::from_hex(0x705848)),
    ("steel", Rgb::from_hex(0xB8B8D0)),
    ("fairy", Rgb::from_hex(0xEE99AC)),
];

/// Inclusive lower bound of each tier, highest first.
const TIER_THRESHOLDS: [(u16, StatTier); 5] = [
    (120, StatTier::Exceptional),
    (90, StatTier::Strong),
    (70, StatTier::AboveAverage),
    (50, StatTier::Average),
    (30, StatTier::BelowAverage),
];

pub fn type_color(type_name: &str) -> Rgb {
    TYPE_PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(type_name.trim()))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

pub fn stat_tier(value: u16) -> StatTier {
    TIER_THRESHOLDS
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map(|(_, tier)| *tier)
        .unwrap_or(StatTier::Weak)
}

pub fn tier_color(tier: StatTier) -> Rgb {
    match tier {
        StatTier::Exceptional => Rgb::from_hex(0x10B981),
        StatTier::Strong => Rgb::from_hex(0x22C55E),
        StatTier::AboveAverage => Rgb::from_hex(0x84CC16),
        StatTier::Average => Rgb::from_hex(0xEAB308),
        StatTier::BelowAverage => Rgb::from_hex(0xF59E0B),
        StatTier::Weak => Rgb::from_hex(0xEF4444),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_type_lookup_is_case_insensitive() {
        assert_eq!(type_color("Electric"), Rgb::from_hex(0xF8D030));
        assert_eq!(type_color("ELECTRIC"), type_color("electric"));
    }

    #[test]
    fn test_unknown_type_gets_default() {
        assert_eq!(type_color("stellar"), DEFAULT_TYPE_COLOR);
        assert_eq!(type_color(""), DEFAULT_TYPE_COLOR);
    }

    #[test]
    fn test_palette_names_are_unique() {
        let names: HashSet<_> = TYPE_PALETTE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), TYPE_PALETTE.len());
    }

    #[test]
    fn test_tier_boundaries_are_closed_below() {
        assert_eq!(stat_tier(255), StatTier::Exceptional);
        assert_eq!(stat_tier(120), StatTier::Exceptional);
        assert_eq!(stat_tier(119), StatTier::Strong);
        assert_eq!(stat_tier(90), StatTier::Strong);
        assert_eq!(stat_tier(89), StatTier::AboveAverage);
        assert_eq!(stat_tier(70), StatTier::AboveAverage);
        assert_eq!(stat_tier(69), StatTier::Average);
        assert_eq!(stat_tier(50), StatTier::Average);
        assert_eq!(stat_tier(49), StatTier::BelowAverage);
        assert_eq!(stat_tier(30), StatTier::BelowAverage);
        assert_eq!(stat_tier(29), StatTier::Weak);
        assert_eq!(stat_tier(0), StatTier::Weak);
    }

    #[test]
    fn test_each_tier_has_distinct_color() {
        let colors: HashSet<_> = StatTier::ALL.iter().map(|t| tier_color(*t)).collect();
        assert_eq!(colors.len(), StatTier::ALL.len());
    }
}
