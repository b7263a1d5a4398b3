//! Small string helpers shared across the crate.

use regex::Regex;

/// True for an empty string or one made entirely of whitespace.
pub fn is_empty_or_whitespace(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// True when `s` is non-empty and every character is alphanumeric.
pub fn is_alphanumeric(s: &str) -> bool {
    !is_empty_or_whitespace(s) && s.chars().all(char::is_alphanumeric)
}

/// `("The quick brown fox", "brown")` -> `"The quick "`
pub fn string_before(s: &str, exp: &str) -> String {
    s.find(exp).map(|pos| s[..pos].to_string()).unwrap_or_default()
}

/// `("The quick brown fox", "brown ")` -> `"fox"`
pub fn string_after(s: &str, exp: &str) -> String {
    s.find(exp)
        .map(|pos| s[pos + exp.len()..].to_string())
        .unwrap_or_default()
}

/// First substring enclosed between `exp_a` and `exp_b`.
/// `("The quick brown fox", "The ", " brown")` -> `"quick"`
/// When no such enclosure exists the input is returned unchanged.
pub fn string_between(s: &str, exp_a: &str, exp_b: &str) -> String {
    let pattern = format!("{}(.*?){}", regex::escape(exp_a), regex::escape(exp_b));
    match Regex::new(&pattern) {
        Ok(re) => re
            .captures(s)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| s.to_string()),
        Err(_) => s.to_string(),
    }
}

/// Per-character uppercasing, used by the registry's two-form match rule.
pub fn to_uppercase(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}
