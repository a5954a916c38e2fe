//! Selector resolution.
//!
//! Turns parsed command-line input (or a search box submission) into exactly
//! one [`LookupKey`]. Precedence is fixed: random flag, then number, then the
//! positional name. Explicit ids are never bounds-checked here; the catalog
//! decides whether they exist.

use crate::{Error, Result};
use pokedex_types::LookupKey;
use rand::Rng;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorInput {
    pub positional: Option<String>,
    pub number: Option<i64>,
    pub random: bool,
}

impl SelectorInput {
    pub fn resolve(&self) -> Result<LookupKey> {
        if self.random {
            return Ok(LookupKey::Random);
        }

        if let Some(number) = self.number {
            return Ok(LookupKey::ById(number));
        }

        match self.positional.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(LookupKey::ByName(token.to_lowercase())),
            _ => Err(Error::NoSelector),
        }
    }
}

/// Resolve free text from the interactive search box.
///
/// Integer text becomes an id lookup, anything else a name lookup. Blank text
/// is rejected before any request is made.
pub fn resolve_query(text: &str) -> Result<LookupKey> {
    let query = text.trim().to_lowercase();
    if query.is_empty() {
        return Err(Error::NoSelector);
    }

    match query.parse::<i64>() {
        Ok(id) => Ok(LookupKey::ById(id)),
        Err(_) => Ok(LookupKey::ByName(query)),
    }
}

/// Replace `Random` with an id drawn uniformly from `[1, upper_bound]`.
pub fn settle<R: Rng>(key: LookupKey, upper_bound: u32, rng: &mut R) -> LookupKey {
    match key {
        LookupKey::Random => {
            let upper = upper_bound.max(1);
            LookupKey::ById(i64::from(rng.random_range(1..=upper)))
        }
        other => other,
    }
}
