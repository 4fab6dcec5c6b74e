//! Numeric token scanning.
//!
//! Reproduces the original console's `strtol`-into-a-scratch-buffer contract:
//! leading whitespace and an optional sign are accepted, scanning stops at the
//! first non-digit (so trailing garbage after the digits is silently
//! accepted), and tokens longer than the scratch buffer are truncated before
//! parsing. The truncation is a documented laxity, not a feature.

use crate::config::units::Steps;

/// Scratch-buffer size per numeric token, including the terminator byte.
pub const SCRATCH_LEN: usize = 24;

/// Scan a signed integer from a token, `strtol`-style.
///
/// Returns `None` when no digits are found. Out-of-range magnitudes clamp to
/// the `i64` range rather than failing, as `strtol` clamps to `LONG_MAX`.
pub fn parse_int(token: &str) -> Option<i64> {
    let bytes = token.as_bytes();
    // Scratch-buffer truncation: 23 characters survive the copy.
    let bytes = &bytes[..bytes.len().min(SCRATCH_LEN - 1)];

    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let negative = match bytes.get(i) {
        Some(b'+') => {
            i += 1;
            false
        }
        Some(b'-') => {
            i += 1;
            true
        }
        _ => false,
    };

    let mut value: i128 = 0;
    let mut digits = 0usize;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + (b - b'0') as i128;
        digits += 1;
        i += 1;
    }

    if digits == 0 {
        return None;
    }
    if negative {
        value = -value;
    }
    Some(value.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
}

/// Scan a signed step count from a token.
pub fn parse_steps(token: &str) -> Option<Steps> {
    parse_int(token).map(Steps::new)
}
