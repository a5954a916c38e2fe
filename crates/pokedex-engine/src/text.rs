/// Title-case a catalog slug.
///
/// The first letter of every whitespace- or hyphen-separated token is
/// uppercased and the rest lowercased; separators are kept as-is. Casing is
/// ASCII-only so the result does not depend on locale.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_token_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() || ch == '-' {
            at_token_start = true;
            out.push(ch);
        } else if at_token_start {
            at_token_start = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }

    out
}

/// Title-case with hyphens turned into spaces, for ability and stat slugs.
pub fn humanize(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}
