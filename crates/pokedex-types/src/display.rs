use crate::Rgb;
use serde::Serialize;
use std::fmt;

/// Display-ready entry produced by the transformer.
///
/// Carries raw numbers rather than formatted strings; presenters decide how
/// many decimals to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub id: u32,
    /// Zero-padded to at least three digits
    pub id_badge: String,
    pub name: String,
    pub types: Vec<TypeBadge>,
    pub stats: Vec<StatBar>,
    pub abilities: AbilityPartition,
    pub height: Height,
    pub weight: Weight,
    pub sprite_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBadge {
    pub name: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    pub label: String,
    pub value: u16,
    /// `value / 255`, clamped to `[0, 1]`
    pub fill_ratio: f64,
    pub tier: StatTier,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatTier {
    Exceptional,
    Strong,
    AboveAverage,
    Average,
    BelowAverage,
    Weak,
}

impl StatTier {
    pub const ALL: [StatTier; 6] = [
        StatTier::Exceptional,
        StatTier::Strong,
        StatTier::AboveAverage,
        StatTier::Average,
        StatTier::BelowAverage,
        StatTier::Weak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatTier::Exceptional => "exceptional",
            StatTier::Strong => "strong",
            StatTier::AboveAverage => "above-average",
            StatTier::Average => "average",
            StatTier::BelowAverage => "below-average",
            StatTier::Weak => "weak",
        }
    }
}

impl fmt::Display for StatTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abilities split by the hidden flag, each side in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbilityPartition {
    pub regular: Vec<String>,
    pub hidden: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Height {
    pub meters: f64,
    pub feet: u32,
    pub inches: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weight {
    pub kilograms: f64,
    pub pounds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_names_are_kebab_case() {
        let names: Vec<_> = StatTier::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            [
                "exceptional",
                "strong",
                "above-average",
                "average",
                "below-average",
                "weak"
            ]
        );
    }
}
