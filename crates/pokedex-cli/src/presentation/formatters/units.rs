use pokedex_types::{Height, Weight};

/// `0.4 m`
pub fn format_height_metric(height: &Height) -> String {
    format!("{:.1} m", height.meters)
}

/// `6.0 kg`
pub fn format_weight_metric(weight: &Weight) -> String {
    format!("{:.1} kg", weight.kilograms)
}

/// `1.7m (5'06")`
pub fn format_height(height: &Height) -> String {
    format!(
        "{:.1}m ({}'{:02}\")",
        height.meters, height.feet, height.inches
    )
}

/// `6.0kg (13.2 lbs)`
pub fn format_weight(weight: &Weight) -> String {
    format!("{:.1}kg ({:.1} lbs)", weight.kilograms, weight.pounds)
}

/// Comma-join, or the literal `None` for an empty list.
pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
