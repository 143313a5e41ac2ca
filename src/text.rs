//! Text normalization for extracted sheet text and raw lookup references

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Soft hyphen (U+00AD), used in the source data as a line-break hint
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Numeric macro embedded in raw lookup references: `<num(12)>`
static NUM_MACRO: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"<num\(([^()]*)\)>").ok());

/// Strip whitespace and soft hyphens from extracted text.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != SOFT_HYPHEN)
        .collect()
}

/// Unwrap `<num(N)>` macros so the reference matches the selector grammar.
pub fn normalize_lookup(raw: &str) -> Cow<'_, str> {
    match NUM_MACRO.as_ref() {
        Some(re) => re.replace_all(raw, "$1"),
        None => Cow::Borrowed(raw),
    }
}

/// True when the lookup column carries no table reference.
pub fn is_placeholder(lookup: &str, tokens: &[String]) -> bool {
    let lookup = lookup.trim();
    lookup.is_empty() || tokens.iter().any(|t| t == lookup)
}
