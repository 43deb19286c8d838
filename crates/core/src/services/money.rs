//! Best-effort extraction of numbers from display strings like "45M€".
//!
//! Unit suffixes are discarded, so "45M€" and "45K€" both read as `45.0`.
//! Stored data already depends on this, so amounts are assumed to be in
//! millions throughout.

/// Extract the numeric magnitude of a free-form display string.
///
/// Every character other than a digit, `.` or `-` is dropped; the longest
/// leading number in what remains is parsed. Anything unparseable is `0.0`.
pub fn parse_magnitude(display: &str) -> f64 {
    let kept: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let bytes = kept.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    kept[..end].parse::<f64>().unwrap_or(0.0)
}

/// Parse an optional display string; a missing value is `0.0`.
pub fn parse_optional(display: Option<&str>) -> f64 {
    display.map(parse_magnitude).unwrap_or(0.0)
}

/// Format a ledger amount as "{value:.1}M€". Zero and negative amounts
/// render as an empty string ("no entry").
pub fn format_magnitude(value: f64) -> String {
    if value > 0.0 {
        format!("{}M€", round_tenths(value))
    } else {
        String::new()
    }
}

/// One decimal place, rounding an exact midpoint up ("1.25" -> "1.3").
///
/// `{:.1}` rounds the exact binary value and breaks ties to even. Stored
/// ledgers were written with ties rounded up, so those are handled here.
/// A one-decimal midpoint is only representable as a multiple of 0.25 with
/// an odd quarter count; everything else is never a tie.
fn round_tenths(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).ceil() / 10.0)
    } else {
        format!("{value:.1}")
    }
}
