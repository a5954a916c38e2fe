/// Number of base stats every catalog entry carries.
pub const STAT_COUNT: usize = 6;

/// Largest value a base stat can take.
pub const MAX_BASE_STAT: u16 = 255;

/// A catalog entry, reduced to the fields the transformer consumes.
///
/// Only constructed by the catalog client after its field checks pass, so the
/// ranges documented on each field hold for every instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Positive national catalog number
    pub id: u32,
    pub name: String,
    /// One or two type names, in display order
    pub types: Vec<String>,
    /// Exactly [`STAT_COUNT`] entries in canonical order
    pub stats: Vec<RawStat>,
    pub abilities: Vec<RawAbility>,
    /// Tenths of a meter
    pub height: u32,
    /// Tenths of a kilogram
    pub weight: u32,
    pub sprite_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStat {
    pub name: String,
    /// 0..=255
    pub base_value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAbility {
    pub name: String,
    pub is_hidden: bool,
}

impl RawStat {
    pub fn new(name: impl Into<String>, base_value: u16) -> Self {
        Self {
            name: name.into(),
            base_value,
        }
    }
}

impl RawAbility {
    pub fn new(name: impl Into<String>, is_hidden: bool) -> Self {
        Self {
            name: name.into(),
            is_hidden,
        }
    }
}
