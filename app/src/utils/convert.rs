use crate::models::error::{MemError, MemResult};

/// Size units in ascending order, each 1024 times the previous one.
pub static UNITS: &[(char, u64)] = &[
    ('B', 1),
    ('K', 1 << 10),
    ('M', 1 << 20),
    ('G', 1 << 30),
    ('T', 1 << 40),
];

fn multiplier(unit: char) -> Option<u64> {
    UNITS.iter().find(|(u, _)| *u == unit).map(|(_, m)| *m)
}

/// Parses a manifest size string such as `"256M"` or `"0.5G"` into bytes.
///
/// The unit suffix is mandatory and case-sensitive. Fractional byte counts
/// are truncated.
pub fn parse_size(s: &str) -> MemResult<u64> {
    let unit = s.chars().next_back().ok_or_else(|| MemError::size(s, "empty size"))?;
    let mult = multiplier(unit).ok_or_else(|| MemError::size(s, "unknown unit suffix"))?;
    let number = &s[..s.len() - unit.len_utf8()];

    let number: f64 = number
        .parse()
        .map_err(|_| MemError::size(s, "not a decimal number"))?;
    if !number.is_finite() || number < 0.0 {
        return Err(MemError::size(s, "size must be a finite non-negative number"));
    }

    let bytes = (number * mult as f64).floor();
    if bytes >= i64::MAX as f64 {
        return Err(MemError::size(s, "size is too large"));
    }
    Ok(bytes as u64)
}

/// Formats a byte count with two decimals and the largest fitting unit,
/// e.g. `1536` becomes `"1.50K"`. Negative counts scale on their magnitude.
pub fn format_size(bytes: i128) -> String {
    let mut size = bytes as f64;
    let mut idx = 0;
    while size.abs() >= 1024.0 && idx < UNITS.len() - 1 {
        size /= 1024.0;
        idx += 1;
    }
    format!("{:.2}{}", size, UNITS[idx].0)
}
