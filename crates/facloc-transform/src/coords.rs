//! Parsing for the WKT-like `"(lat, lon)"` strings in the library data.

use std::sync::LazyLock;

use regex::Regex;

use crate::data_utils::parse_f64;

/// Two optionally signed numeric tokens, comma separated, inside parentheses.
static LOCATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([0-9.\-]+)\s*,\s*([0-9.\-]+)\s*\)").expect("invalid location regex")
});

/// Extracts `(latitude, longitude)` from a location string.
///
/// Returns None when the pattern does not match or a captured token does not
/// parse as a finite float; callers treat both coordinates as missing.
pub fn parse_location(value: &str) -> Option<(f64, f64)> {
    let captures = LOCATION_REGEX.captures(value)?;
    let latitude = parse_f64(&captures[1]).filter(|parsed| parsed.is_finite())?;
    let longitude = parse_f64(&captures[2]).filter(|parsed| parsed.is_finite())?;
    Some((latitude, longitude))
}
