use crate::{PiholeError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// How long DNS blocking stays disabled, in whole seconds.
///
/// Parsed from strings such as `"30s"`, `"5m"` or `"1h30m"`: a sequence of
/// decimal numbers, each with an optional fraction and a required unit
/// (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`). Sub-second remainders are
/// truncated and the result must be at least one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockingDuration(u64);

impl BlockingDuration {
    /// Duration used when the caller does not supply one
    pub const DEFAULT: Self = Self(60);

    /// Create a duration from a number of seconds
    pub fn from_secs(secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(PiholeError::InvalidDuration {
                input: secs.to_string(),
                reason: "must be at least one second",
            });
        }
        Ok(Self(secs))
    }

    /// Whole seconds
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// As a [`Duration`]
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for BlockingDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for BlockingDuration {
    type Err = PiholeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| PiholeError::InvalidDuration {
            input: s.to_string(),
            reason,
        };

        let (negative, nanos) = parse_nanos(s).map_err(invalid)?;
        if negative && nanos > 0 {
            return Err(invalid("must be positive"));
        }

        match nanos / NANOS_PER_SEC {
            0 => Err(invalid("must be at least one second")),
            secs => Ok(Self(secs)),
        }
    }
}

impl fmt::Display for BlockingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = (self.0 / 3600, self.0 / 60 % 60, self.0 % 60);
        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        if seconds > 0 {
            write!(f, "{seconds}s")?;
        }
        Ok(())
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Parse a duration string into its sign and magnitude in nanoseconds.
fn parse_nanos(s: &str) -> std::result::Result<(bool, u64), &'static str> {
    const OVERFLOW: &str = "out of range";

    let (negative, mut rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if rest == "0" {
        return Ok((negative, 0));
    }
    if rest.is_empty() {
        return Err("empty duration");
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after) = rest.split_at(int_len);

        let (frac_digits, after) = match after.strip_prefix('.') {
            Some(tail) => tail.split_at(tail.bytes().take_while(u8::is_ascii_digit).count()),
            None => ("", after),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err("expected a number");
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        if unit_len == 0 {
            return Err("missing unit");
        }
        let (unit, tail) = after.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or("unknown unit")?;

        let whole = parse_digits(int_digits)
            .and_then(|n| n.checked_mul(scale))
            .ok_or(OVERFLOW)?;
        total = total
            .checked_add(whole)
            .and_then(|t| t.checked_add(fraction_nanos(frac_digits, scale)))
            .ok_or(OVERFLOW)?;

        rest = tail;
    }

    Ok((negative, total))
}

fn parse_digits(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}

/// Nanoseconds contributed by the fractional digits of one component.
/// Digits beyond nanosecond precision of the largest unit are ignored.
fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let (value, denom) = digits
        .bytes()
        .take(19)
        .fold((0u128, 1u128), |(value, denom), d| {
            (value * 10 + u128::from(d - b'0'), denom * 10)
        });
    u64::try_from(value * u128::from(scale) / denom).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: &str) -> u64 {
        s.parse::<BlockingDuration>().unwrap().as_secs()
    }

    #[test]
    fn test_parse_simple_units() {
        assert_eq!(secs("30s"), 30);
        assert_eq!(secs("2m"), 120);
        assert_eq!(secs("5m"), 300);
        assert_eq!(secs("1h"), 3600);
        assert_eq!(secs("+45s"), 45);
    }

    #[test]
    fn test_parse_compound_and_fractions() {
        assert_eq!(secs("1h30m"), 5400);
        assert_eq!(secs("1m30s"), 90);
        assert_eq!(secs("1.5m"), 90);
        assert_eq!(secs(".5h"), 1800);
        assert_eq!(secs("2.5s"), 2);
        assert_eq!(secs("1.s"), 1);
    }

    #[test]
    fn test_sub_second_units_truncate() {
        assert_eq!(secs("1500ms"), 1);
        assert_eq!(secs("2999999us"), 2);
        assert_eq!(secs("1s999ms"), 1);
        assert_eq!(secs("3000000000ns"), 3);
    }

    #[test]
    fn test_rejects_invalid_input() {
        for input in ["", "5", "5x", "m", ".s", "-", "1h-5m", "s5"] {
            assert!(
                input.parse::<BlockingDuration>().is_err(),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        for input in ["0", "0s", "-5m", "500ms", "-0"] {
            let err = input.parse::<BlockingDuration>().unwrap_err();
            assert!(matches!(err, PiholeError::InvalidDuration { .. }));
        }
    }

    #[test]
    fn test_overflow() {
        let err = "99999999999999999999h".parse::<BlockingDuration>().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_default_is_one_minute() {
        assert_eq!(BlockingDuration::default().as_secs(), 60);
        assert_eq!(BlockingDuration::default().as_duration(), Duration::from_secs(60));
    }

    #[test]
    fn test_from_secs() {
        assert_eq!(BlockingDuration::from_secs(90).unwrap().as_secs(), 90);
        assert!(BlockingDuration::from_secs(0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockingDuration::DEFAULT.to_string(), "1m");
        assert_eq!(BlockingDuration::from_secs(45).unwrap().to_string(), "45s");
        assert_eq!(BlockingDuration::from_secs(5400).unwrap().to_string(), "1h30m");
        assert_eq!(BlockingDuration::from_secs(3661).unwrap().to_string(), "1h1m1s");
    }
}
