//! Display formatting for STX amounts, addresses and times.

use crate::error::{Error, Result};
use unicode_segmentation::UnicodeSegmentation;

/// microSTX per STX.
pub const MICRO_PER_STX: u64 = 1_000_000;

/// Fractional digits of one STX.
pub const STX_DECIMALS: usize = 6;

/// Approximate Stacks block time in seconds.
pub const BLOCK_TIME_SECS: u64 = 600;

/// Converts microSTX to STX.
pub fn micro_to_stx(micro: u64) -> f64 {
    micro as f64 / MICRO_PER_STX as f64
}

/// Parses a decimal STX string (e.g. `"12.5"`) into microSTX.
///
/// At most six fractional digits are accepted; signs, exponents and empty input
/// are rejected.
///
/// ```rust
/// use susu_widgets::format::stx_to_micro;
///
/// assert_eq!(stx_to_micro("12.5").unwrap(), 12_500_000);
/// assert_eq!(stx_to_micro(" 0.000001 ").unwrap(), 1);
/// assert!(stx_to_micro("-1").is_err());
/// ```
pub fn stx_to_micro(input: &str) -> Result<u64> {
    let invalid = |reason| Error::InvalidAmount {
        input: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("empty amount"));
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected digits and at most one decimal point"));
    }
    if frac.len() > STX_DECIMALS {
        return Err(invalid("more than 6 decimal places"));
    }

    let overflow = || Error::AmountOverflow(input.to_string());
    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<6}").parse().map_err(|_| overflow())?
    };

    whole
        .checked_mul(MICRO_PER_STX)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(overflow)
}

/// Formats microSTX as `1,250.5 STX`, dropping trailing fractional zeros.
pub fn format_stx(micro: u64) -> String {
    let whole = micro / MICRO_PER_STX;
    let frac = micro % MICRO_PER_STX;
    let mut out = group_thousands(whole);
    if frac > 0 {
        let digits = format!("{frac:06}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push_str(" STX");
    out
}

/// Inserts `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Formats large counts as `950`, `1.2K`, `3.4M`, `5B`.
pub fn format_compact(n: u64) -> String {
    const UNITS: [(u64, &str); 3] = [
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
    ];
    for (scale, suffix) in UNITS {
        if n >= scale {
            let tenths = n / (scale / 10);
            return if tenths % 10 == 0 {
                format!("{}{suffix}", tenths / 10)
            } else {
                format!("{}.{}{suffix}", tenths / 10, tenths % 10)
            };
        }
    }
    n.to_string()
}

/// Shortens an address to `head…tail` graphemes. Addresses that would not get
/// shorter are returned unchanged.
///
/// ```rust
/// use susu_widgets::format::truncate_address;
///
/// assert_eq!(
///     truncate_address("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7", 5, 4),
///     "SP2J6…9EJ7"
/// );
/// assert_eq!(truncate_address("SP123", 5, 4), "SP123");
/// ```
pub fn truncate_address(address: &str, head: usize, tail: usize) -> String {
    let graphemes: Vec<&str> = address.graphemes(true).collect();
    if graphemes.len() <= head + tail + 1 {
        return address.to_string();
    }
    let mut out: String = graphemes[..head].concat();
    out.push('…');
    out.push_str(&graphemes[graphemes.len() - tail..].concat());
    out
}

/// Truncates text to `max` graphemes, ending with `…` when shortened.
pub fn truncate_text(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = graphemes[..max - 1].concat();
    out.push('…');
    out
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Describes the distance between two unix timestamps (seconds) in words,
/// e.g. `5 minutes ago` or `in 2 days`. Differences under a minute read
/// `just now`.
pub fn format_relative_time(then: u64, now: u64) -> String {
    const STEPS: [(u64, &str); 6] = [
        (365 * 86_400, "year"),
        (30 * 86_400, "month"),
        (7 * 86_400, "week"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
    ];

    let (delta, future) = if then > now {
        (then - now, true)
    } else {
        (now - then, false)
    };
    if delta < 60 {
        return "just now".to_string();
    }

    let (size, unit) = STEPS
        .iter()
        .copied()
        .find(|(size, _)| delta >= *size)
        .unwrap_or((60, "minute"));
    let phrase = plural(delta / size, unit);
    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// Approximates the wall time until block `target` from block `current`,
/// e.g. `~3 hours`. Reached or passed targets read `now`.
pub fn format_blocks_remaining(current: u64, target: u64) -> String {
    if target <= current {
        return "now".to_string();
    }
    let secs = (target - current).saturating_mul(BLOCK_TIME_SECS);
    let phrase = if secs >= 86_400 {
        plural(secs / 86_400, "day")
    } else if secs >= 3_600 {
        plural(secs / 3_600, "hour")
    } else {
        plural(secs / 60, "minute")
    };
    format!("~{phrase}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_to_stx() {
        assert_eq!(micro_to_stx(1_500_000), 1.5);
        assert_eq!(micro_to_stx(0), 0.0);
    }

    #[test]
    fn test_stx_to_micro_accepts_decimals() {
        assert_eq!(stx_to_micro("1").unwrap(), 1_000_000);
        assert_eq!(stx_to_micro("0.5").unwrap(), 500_000);
        assert_eq!(stx_to_micro(".25").unwrap(), 250_000);
        assert_eq!(stx_to_micro("3.").unwrap(), 3_000_000);
        assert_eq!(stx_to_micro("100.123456").unwrap(), 100_123_456);
    }

    #[test]
    fn test_stx_to_micro_rejects_garbage() {
        assert!(matches!(stx_to_micro(""), Err(Error::InvalidAmount { .. })));
        assert!(matches!(stx_to_micro("."), Err(Error::InvalidAmount { .. })));
        assert!(matches!(stx_to_micro("1e5"), Err(Error::InvalidAmount { .. })));
        assert!(matches!(stx_to_micro("1.2.3"), Err(Error::InvalidAmount { .. })));
        assert!(matches!(stx_to_micro("0.0000001"), Err(Error::InvalidAmount { .. })));
        assert!(matches!(
            stx_to_micro("99999999999999999999"),
            Err(Error::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_format_stx() {
        assert_eq!(format_stx(0), "0 STX");
        assert_eq!(format_stx(1_250_500_000), "1,250.5 STX");
        assert_eq!(format_stx(1), "0.000001 STX");
        assert_eq!(format_stx(12_000_000), "12 STX");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(1_250), "1.2K");
        assert_eq!(format_compact(3_400_000), "3.4M");
        assert_eq!(format_compact(5_000_000_000), "5B");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Lagos Traders", 20), "Lagos Traders");
        assert_eq!(truncate_text("Lagos Traders", 6), "Lagos…");
        assert_eq!(truncate_text("abc", 0), "");
    }

    #[test]
    fn test_relative_time() {
        let now = 1_700_000_000;
        assert_eq!(format_relative_time(now - 30, now), "just now");
        assert_eq!(format_relative_time(now - 60, now), "1 minute ago");
        assert_eq!(format_relative_time(now - 5 * 60, now), "5 minutes ago");
        assert_eq!(format_relative_time(now - 3 * 86_400, now), "3 days ago");
        assert_eq!(format_relative_time(now + 2 * 3_600, now), "in 2 hours");
        assert_eq!(format_relative_time(now - 400 * 86_400, now), "1 year ago");
    }

    #[test]
    fn test_blocks_remaining() {
        assert_eq!(format_blocks_remaining(100, 100), "now");
        assert_eq!(format_blocks_remaining(100, 101), "~10 minutes");
        assert_eq!(format_blocks_remaining(100, 118), "~3 hours");
        assert_eq!(format_blocks_remaining(0, 288), "~2 days");
    }

    #[test]
    fn test_blocks_remaining_saturates_on_huge_gaps() {
        let max_days = u64::MAX / 86_400;
        assert_eq!(format_blocks_remaining(0, u64::MAX), format!("~{max_days} days"));
        assert_eq!(format_blocks_remaining(0, u64::MAX / 100), format!("~{max_days} days"));
        assert_eq!(format_blocks_remaining(u64::MAX - 1, u64::MAX), "~10 minutes");
    }
}
