use owo_colors::OwoColorize;
use pokedex_types::Rgb;

/// Wrap `text` in a 24-bit foreground color when color is enabled.
pub fn paint(text: &str, color: Rgb, enable_color: bool) -> String {
    if enable_color {
        text.truecolor(color.r, color.g, color.b).to_string()
    } else {
        text.to_string()
    }
}

pub fn paint_bold(text: &str, color: Rgb, enable_color: bool) -> String {
    if enable_color {
        text.truecolor(color.r, color.g, color.b).bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint("Electric", Rgb::from_hex(0xF8D030), false), "Electric");
    }

    #[test]
    fn test_paint_enabled_wraps_in_truecolor_escape() {
        let painted = paint("Electric", Rgb::from_hex(0xF8D030), true);
        assert!(painted.contains("\x1b[38;2;248;208;48m"));
        assert!(painted.contains("Electric"));
    }
}
