//! Text normalization applied to submitted cultor fields.
//!
//! Title case here means: split on whitespace runs, uppercase the first
//! character of each token, lowercase the rest, and join with single spaces.
//! Separators inside a token (`'`, `-`) do not start a new word, so
//! `"maría-josé"` becomes `"María-josé"`.

/// Normalize `input` to title case.
///
/// Idempotent for any input: `title_case(&title_case(s)) == title_case(s)`.
///
/// # Examples
///
/// ```
/// use cultores_core::naming::title_case;
///
/// assert_eq!(title_case("  josé   ÁNGEL "), "José Ángel");
/// assert_eq!(title_case("o'neil"), "O'neil");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_token(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(token.len());
    // Characters whose uppercase form expands (e.g. 'ß' -> "SS") are kept
    // as-is so that a second pass cannot lowercase part of the expansion.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Trim `input`; return `None` when nothing is left.
pub fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

/// Trim and lowercase; blank becomes `None`.
pub fn lower_or_none(input: Option<&str>) -> Option<String> {
    non_blank(input).map(str::to_lowercase)
}
