//! Cell-level value coercion shared by the dataset transforms.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses an identifier column: plain integers, with a fallback through
/// float truncation for sources that render ids as `"1234.0"`.
pub fn parse_id(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    parse_f64(trimmed)
        .filter(|parsed| parsed.is_finite())
        .map(|parsed| parsed.trunc() as i64)
}

/// Parses a non-negative count with truncation semantics, not rounding.
/// Negative and non-finite values saturate to zero.
pub fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<u32>() {
        return Some(parsed);
    }
    parse_f64(trimmed).map(|parsed| parsed.trunc() as u32)
}
