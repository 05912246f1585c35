//! Elapsed-time rendering for the `elapsed` field of a result record.
//!
//! Pure formatting with no side effects; usable independently of the rest
//! of the crate.

const UNITS: &[(&str, u64)] = &[
    ("y", 60 * 60 * 24 * 7 * 52),
    ("w", 60 * 60 * 24 * 7),
    ("d", 60 * 60 * 24),
    ("h", 60 * 60),
    ("m", 60),
    ("s", 1),
];

/// Renders whole seconds as compact unit tokens: `format_elapsed(65)` is
/// `"1m5s"`, `format_elapsed(604800)` is `"1w"`, `format_elapsed(0)` is
/// the empty string.
pub fn format_elapsed(total_seconds: u64) -> String {
    format_elapsed_with(total_seconds, "")
}

/// Greedily decomposes `total_seconds` into the largest applicable units,
/// emitting a `<value><suffix>` token for every unit with a non-zero
/// quotient, most-significant first, joined with `separator`.
///
/// Decomposition stops as soon as the remainder is fully consumed, so
/// trailing zero-value units are never emitted: 60 seconds renders as
/// `"1m"`, not `"1m0s"`.
pub fn format_elapsed_with(total_seconds: u64, separator: &str) -> String {
    let mut remaining = total_seconds;
    let mut tokens = Vec::new();

    for &(suffix, length) in UNITS {
        let value = remaining / length;
        if value > 0 {
            remaining %= length;
            tokens.push(format!("{}{}", value, suffix));
        }
        if remaining < 1 {
            break;
        }
    }

    tokens.join(separator)
}
