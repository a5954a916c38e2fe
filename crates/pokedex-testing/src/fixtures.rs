//! PokéAPI-shaped JSON payloads.
//!
//! Only the fields the client reads are filled in, plus a couple of unrelated
//! ones so parsing is exercised against extra keys.

use serde_json::{Value, json};

pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

pub fn sprite_url(id: i64) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
        id
    )
}

/// Build a payload value. `stats` are assigned to [`STAT_NAMES`] in order.
pub fn pokemon_value(
    id: i64,
    name: &str,
    types: &[&str],
    stats: &[u16],
    abilities: &[(&str, bool)],
    height: u32,
    weight: u32,
) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| {
            json!({
                "slot": i + 1,
                "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{}/", t) }
            })
        })
        .collect();

    let stats: Vec<Value> = stats
        .iter()
        .zip(STAT_NAMES.iter().cycle())
        .map(|(value, stat)| {
            json!({
                "base_stat": value,
                "effort": 0,
                "stat": { "name": stat, "url": "https://pokeapi.co/api/v2/stat/" }
            })
        })
        .collect();

    let abilities: Vec<Value> = abilities
        .iter()
        .enumerate()
        .map(|(i, (ability, hidden))| {
            json!({
                "ability": { "name": ability, "url": "https://pokeapi.co/api/v2/ability/" },
                "is_hidden": hidden,
                "slot": i + 1
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "base_experience": 112,
        "order": id,
        "types": types,
        "stats": stats,
        "abilities": abilities,
        "height": height,
        "weight": weight,
        "sprites": { "front_default": sprite_url(id), "back_default": null }
    })
}

pub fn pokemon_json(
    id: i64,
    name: &str,
    types: &[&str],
    stats: &[u16],
    abilities: &[(&str, bool)],
    height: u32,
    weight: u32,
) -> String {
    to_pretty(&pokemon_value(
        id, name, types, stats, abilities, height, weight,
    ))
}

pub fn pikachu_json() -> String {
    pokemon_json(
        25,
        "pikachu",
        &["electric"],
        &[35, 55, 40, 50, 50, 90],
        &[("static", false), ("lightning-rod", true)],
        4,
        60,
    )
}

pub fn charizard_json() -> String {
    let mut value = pokemon_value(
        6,
        "charizard",
        &["fire", "flying"],
        &[78, 84, 78, 109, 85, 100],
        &[("blaze", false), ("solar-power", true)],
        17,
        905,
    );
    // Serve types out of slot order to check the client sorts by slot.
    if let Some(types) = value["types"].as_array_mut() {
        types.reverse();
    }
    to_pretty(&value)
}

/// Entry with a type name missing from every palette
pub fn unknown_type_json() -> String {
    pokemon_json(
        10_001,
        "deoxys-attack",
        &["stellar"],
        &[50, 180, 20, 180, 20, 150],
        &[("pressure", false)],
        17,
        608,
    )
}

pub fn missing_stats_json() -> String {
    let mut value = pokemon_value(
        25,
        "pikachu",
        &["electric"],
        &[35, 55, 40, 50, 50, 90],
        &[("static", false)],
        4,
        60,
    );
    if let Some(object) = value.as_object_mut() {
        object.remove("stats");
    }
    to_pretty(&value)
}

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
