//! Duration expressions such as `300ms`, `1.5h` or `2h45m`.
//!
//! A duration is a sequence of decimal numbers, each with an optional fraction
//! and a unit suffix. Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`,
//! `m` and `h`. A lone `0` needs no unit. An optional leading `+` is
//! accepted; a leading `-` is only accepted for zero, since
//! [`std::time::Duration`] cannot be negative.

use std::time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Errors produced by [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDurationError {
    /// The text does not follow the duration grammar.
    #[error("invalid duration \"{0}\"")]
    Invalid(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),

    /// A unit suffix is not one of `ns us µs μs ms s m h`.
    #[error("unknown unit \"{unit}\" in duration \"{text}\"")]
    UnknownUnit {
        /// The unrecognised suffix
        unit: String,
        /// Full duration text
        text: String,
    },

    /// The duration is below zero.
    #[error("negative duration \"{0}\" is not supported")]
    Negative(String),

    /// The duration does not fit in 64 bits of nanoseconds.
    #[error("duration \"{0}\" is out of range")]
    Overflow(String),
}

/// Parse a duration expression.
///
/// ```
/// use std::time::Duration;
///
/// assert_eq!(envload::parse_duration("2h30m").unwrap(), Duration::from_secs(9000));
/// assert_eq!(envload::parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(envload::parse_duration("10").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<Duration, ParseDurationError> {
    let invalid = || ParseDurationError::Invalid(text.to_string());

    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        // Integer part.
        let (whole, after_whole) = leading_int(rest).ok_or_else(|| {
            ParseDurationError::Overflow(text.to_string())
        })?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        // Fraction part.
        let mut fraction = 0u64;
        let mut scale = 1f64;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (f, s, after_fraction) = leading_fraction(after_dot);
            has_fraction = after_fraction.len() != after_dot.len();
            fraction = f;
            scale = s;
            rest = after_fraction;
        }
        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(ParseDurationError::MissingUnit(text.to_string()));
        }
        let (suffix, after_unit) = rest.split_at(unit_len);
        rest = after_unit;
        let unit = unit_nanos(suffix).ok_or_else(|| ParseDurationError::UnknownUnit {
            unit: suffix.to_string(),
            text: text.to_string(),
        })?;

        let overflow = || ParseDurationError::Overflow(text.to_string());
        let mut value = whole.checked_mul(unit).ok_or_else(overflow)?;
        if fraction > 0 {
            // Scale the fraction digits into the unit.
            let extra = (fraction as f64 * (unit as f64 / scale)) as u64;
            value = value.checked_add(extra).ok_or_else(overflow)?;
        }
        total = total.checked_add(value).ok_or_else(overflow)?;
    }

    if negative && total != 0 {
        return Err(ParseDurationError::Negative(text.to_string()));
    }
    Ok(Duration::from_nanos(total))
}

fn unit_nanos(suffix: &str) -> Option<u64> {
    let nanos = match suffix {
        "ns" => NANOSECOND,
        // U+00B5 micro sign and U+03BC greek small letter mu
        "us" | "\u{b5}s" | "\u{3bc}s" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        _ => return None,
    };
    Some(nanos)
}

/// Consume leading ASCII digits. Returns `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    Some((value, &s[end..]))
}

/// Consume leading fraction digits, dropping precision that would overflow.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1f64;
    let mut overflowed = false;
    for b in s[..end].bytes() {
        if overflowed {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(v) => {
                value = v;
                scale *= 10.0;
            }
            None => overflowed = true,
        }
    }
    (value, scale, &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_units() {
        assert_eq!(parse_duration("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("42ns").unwrap(), Duration::from_nanos(42));
        assert_eq!(parse_duration("7us").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7μs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("3m").unwrap(), Duration::from_secs(180));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_compound() {
        assert_eq!(parse_duration("2h30m").unwrap(), Duration::from_secs(9000));
        assert_eq!(
            parse_duration("1h2m3s4ms").unwrap(),
            Duration::from_millis(3_723_004)
        );
    }

    #[test]
    fn test_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2.s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("0.25ms").unwrap(), Duration::from_micros(250));
    }

    #[test]
    fn test_zero_and_signs() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            parse_duration("-5s"),
            Err(ParseDurationError::Negative("-5s".to_string()))
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(parse_duration(""), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_duration("-"), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_duration("s"), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_duration(".s"), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_duration("5s "), Err(ParseDurationError::UnknownUnit { .. })));
        assert!(matches!(
            parse_duration("10"),
            Err(ParseDurationError::MissingUnit(_))
        ));
        assert!(matches!(
            parse_duration("3d"),
            Err(ParseDurationError::UnknownUnit { ref unit, .. }) if unit == "d"
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            parse_duration("99999999999999999999s"),
            Err(ParseDurationError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("9999999999h"),
            Err(ParseDurationError::Overflow(_))
        ));
    }
}
