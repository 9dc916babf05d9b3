//! Query-string policy for the kill feed endpoint.
//!
//! Dashboards poll the kill feed either by count (`lastn`) or by time
//! cursor (`lasttime`). Parameters are parsed leniently: anything that does
//! not parse falls back to a default instead of failing the request.
//!
//! Both parameters accept a leading integer followed by arbitrary text
//! (`"42abc"` reads as 42).

use squadfeed_types::WoundEvent;

use crate::killfeed::KillFeed;

/// Number of events returned when `lastn` is missing or invalid.
pub const DEFAULT_LAST_N: usize = 10;

/// Largest accepted cursor magnitude (about 273,790 years from the epoch).
pub const MAX_TIMESTAMP_MS: i64 = 8_640_000_000_000_000;

/// Which kill feed query a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillfeedSelector {
    /// Events after the given epoch-millisecond cursor.
    Since(i64),
    /// The most recent `n` events.
    Latest(usize),
}

impl KillfeedSelector {
    /// Resolve raw `lasttime` and `lastn` query values.
    ///
    /// A usable `lasttime` wins and `lastn` is ignored. A cursor of zero is
    /// treated as absent. Otherwise `lastn` is used, falling back to
    /// [`DEFAULT_LAST_N`] when it is missing, not numeric, or below one.
    pub fn from_params(lasttime: Option<&str>, lastn: Option<&str>) -> Self {
        lasttime.and_then(parse_cursor).map_or_else(
            || Self::Latest(lastn.and_then(parse_last_n).unwrap_or(DEFAULT_LAST_N)),
            Self::Since,
        )
    }

    /// Run the selected query against a kill feed.
    ///
    /// Only a cursor query can produce `None`; see [`KillFeed::since`].
    pub fn query(self, feed: &KillFeed) -> Option<Vec<WoundEvent>> {
        match self {
            Self::Since(cursor_ms) => feed.since(cursor_ms),
            Self::Latest(n) => Some(feed.latest(n)),
        }
    }
}

/// Parse the leading integer of a string.
///
/// Leading whitespace and a single sign are accepted, followed by an
/// optional `0x`/`0X` hexadecimal prefix; parsing stops at the first
/// character that is not a digit in that radix. Returns `None` if no digit
/// is found. Values outside the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = trimmed.strip_prefix('-').map_or_else(
        || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        |rest| (true, rest),
    );

    let (radix, body) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .map_or((10, unsigned), |hex| (16, hex));

    let end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let digits = body.get(..end).filter(|d| !d.is_empty())?;

    // Input made only of valid digits fails to parse only on overflow.
    let magnitude = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    Some(if negative {
        0_i64.saturating_sub(magnitude)
    } else {
        magnitude
    })
}

fn parse_cursor(raw: &str) -> Option<i64> {
    parse_leading_int(raw)
        .filter(|&t| t != 0 && t.unsigned_abs() <= MAX_TIMESTAMP_MS.unsigned_abs())
}

fn parse_last_n(raw: &str) -> Option<usize> {
    parse_leading_int(raw)
        .filter(|&n| n >= 1)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_plain_and_signed() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("+42"), Some(42));
        assert_eq!(parse_leading_int("-42"), Some(-42));
        assert_eq!(parse_leading_int("  7"), Some(7));
    }

    #[test]
    fn leading_int_ignores_trailing_text() {
        assert_eq!(parse_leading_int("42abc"), Some(42));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("1e5"), Some(1));
    }

    #[test]
    fn leading_int_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("+-1"), None);
    }

    #[test]
    fn leading_int_reads_hex_prefix() {
        assert_eq!(parse_leading_int("0x10"), Some(16));
        assert_eq!(parse_leading_int("0XfF"), Some(255));
        assert_eq!(parse_leading_int("-0x10"), Some(-16));
        assert_eq!(parse_leading_int("0x1g"), Some(1));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xzz"), None);
    }

    #[test]
    fn hex_lasttime_is_a_cursor() {
        assert_eq!(
            KillfeedSelector::from_params(Some("0x10"), Some("3")),
            KillfeedSelector::Since(16)
        );
    }

    #[test]
    fn leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(
            parse_leading_int("-99999999999999999999999"),
            Some(-9_223_372_036_854_775_807)
        );
    }

    #[test]
    fn valid_lasttime_wins_over_lastn() {
        assert_eq!(
            KillfeedSelector::from_params(Some("1714564800250"), Some("3")),
            KillfeedSelector::Since(1_714_564_800_250)
        );
    }

    #[test]
    fn invalid_lasttime_falls_back_to_lastn() {
        for raw in ["abc", "", "0", "9999999999999999999"] {
            assert_eq!(
                KillfeedSelector::from_params(Some(raw), Some("3")),
                KillfeedSelector::Latest(3),
                "lasttime={raw:?}"
            );
        }
    }

    #[test]
    fn lasttime_at_range_limit_is_accepted() {
        assert_eq!(
            KillfeedSelector::from_params(Some("8640000000000000"), None),
            KillfeedSelector::Since(MAX_TIMESTAMP_MS)
        );
        assert_eq!(
            KillfeedSelector::from_params(Some("8640000000000001"), None),
            KillfeedSelector::Latest(DEFAULT_LAST_N)
        );
    }

    #[test]
    fn negative_lasttime_is_a_cursor() {
        assert_eq!(
            KillfeedSelector::from_params(Some("-5"), None),
            KillfeedSelector::Since(-5)
        );
    }

    #[test]
    fn lastn_defaults_to_ten() {
        assert_eq!(
            KillfeedSelector::from_params(None, None),
            KillfeedSelector::Latest(DEFAULT_LAST_N)
        );
        for raw in ["abc", "0", "-3", ""] {
            assert_eq!(
                KillfeedSelector::from_params(None, Some(raw)),
                KillfeedSelector::Latest(DEFAULT_LAST_N),
                "lastn={raw:?}"
            );
        }
    }

    #[test]
    fn lastn_large_values_mean_everything() {
        let selector = KillfeedSelector::from_params(None, Some("99999999999999999999"));
        assert!(matches!(selector, KillfeedSelector::Latest(n) if n > crate::KILLFEED_CAPACITY));
    }
}
