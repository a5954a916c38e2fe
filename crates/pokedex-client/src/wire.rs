//! PokéAPI payload shapes and their conversion into [`RawRecord`].
//!
//! Every field the transformer reads is non-optional here, so a missing or
//! wrong-typed field fails deserialization instead of surfacing later.

use crate::{Error, Result};
use pokedex_types::{MAX_BASE_STAT, RawAbility, RawRecord, RawStat, STAT_COUNT};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PokemonPayload {
    id: i64,
    name: String,
    types: Vec<TypeSlot>,
    stats: Vec<StatSlot>,
    abilities: Vec<AbilitySlot>,
    height: u32,
    weight: u32,
    #[serde(default)]
    sprites: Option<Sprites>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(default)]
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
    is_hidden: bool,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
}

/// Parse a `/pokemon/{key}` response body.
pub fn parse_record(body: &str) -> Result<RawRecord> {
    let payload: PokemonPayload = serde_json::from_str(body)?;
    payload.try_into()
}

impl TryFrom<PokemonPayload> for RawRecord {
    type Error = Error;

    fn try_from(payload: PokemonPayload) -> Result<Self> {
        let id = u32::try_from(payload.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| Error::MalformedResponse(format!("invalid id {}", payload.id)))?;

        if payload.types.is_empty() || payload.types.len() > 2 {
            return Err(Error::MalformedResponse(format!(
                "expected 1 or 2 types, got {}",
                payload.types.len()
            )));
        }

        if payload.stats.len() != STAT_COUNT {
            return Err(Error::MalformedResponse(format!(
                "expected {} stats, got {}",
                STAT_COUNT,
                payload.stats.len()
            )));
        }

        if let Some(stat) = payload.stats.iter().find(|s| s.base_stat > MAX_BASE_STAT) {
            return Err(Error::MalformedResponse(format!(
                "stat '{}' out of range: {}",
                stat.stat.name, stat.base_stat
            )));
        }

        // Slots are 1-based display positions; payloads without them keep source order.
        let mut types = payload.types;
        types.sort_by_key(|t| t.slot);

        Ok(RawRecord {
            id,
            name: payload.name,
            types: types.into_iter().map(|t| t.kind.name).collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|s| RawStat::new(s.stat.name, s.base_stat))
                .collect(),
            abilities: payload
                .abilities
                .into_iter()
                .map(|a| RawAbility::new(a.ability.name, a.is_hidden))
                .collect(),
            height: payload.height,
            weight: payload.weight,
            sprite_url: payload
                .sprites
                .and_then(|s| s.front_default)
                .filter(|url| !url.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_testing::fixtures;

    #[test]
    fn test_parse_pikachu() {
        let record = parse_record(&fixtures::pikachu_json()).unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.types, vec!["electric"]);
        let values: Vec<u16> = record.stats.iter().map(|s| s.base_value).collect();
        assert_eq!(values, vec![35, 55, 40, 50, 50, 90]);
        assert_eq!(record.stats[0].name, "hp");
        assert_eq!(
            record.abilities,
            vec![
                RawAbility::new("static", false),
                RawAbility::new("lightning-rod", true)
            ]
        );
        assert_eq!(record.height, 4);
        assert_eq!(record.weight, 60);
        assert!(record.sprite_url.as_deref().unwrap().ends_with("/25.png"));
    }

    #[test]
    fn test_types_follow_slot_order() {
        let record = parse_record(&fixtures::charizard_json()).unwrap();
        assert_eq!(record.types, vec!["fire", "flying"]);
    }

    #[test]
    fn test_missing_stats_is_malformed() {
        let result = parse_record(&fixtures::missing_stats_json());
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_not_json_is_malformed() {
        let result = parse_record("<html>Service Unavailable</html>");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_wrong_typed_field_is_malformed() {
        let body = fixtures::pikachu_json().replace("\"height\": 4", "\"height\": \"tall\"");
        assert!(matches!(
            parse_record(&body),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_short_stat_list_is_malformed() {
        let body = fixtures::pokemon_json(
            1,
            "bulbasaur",
            &["grass"],
            &[45, 49, 49],
            &[("overgrow", false)],
            7,
            69,
        );
        let err = parse_record(&body).unwrap_err();
        assert!(err.to_string().contains("expected 6 stats"));
    }

    #[test]
    fn test_out_of_range_stat_is_malformed() {
        let body = fixtures::pokemon_json(
            1,
            "bulbasaur",
            &["grass"],
            &[45, 49, 49, 65, 65, 300],
            &[],
            7,
            69,
        );
        assert!(matches!(
            parse_record(&body),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_no_types_is_malformed() {
        let body = fixtures::pokemon_json(1, "bulbasaur", &[], &[1, 2, 3, 4, 5, 6], &[], 7, 69);
        assert!(matches!(
            parse_record(&body),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_null_sprite_is_absent() {
        let body = fixtures::pikachu_json().replace(
            "\"front_default\": \"https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png\"",
            "\"front_default\": null",
        );
        let record = parse_record(&body).unwrap();
        assert!(record.sprite_url.is_none());
    }
}
