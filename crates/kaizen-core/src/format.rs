//! Text helpers: duration breakdown and thousands grouping.

use std::fmt::Write;

use chrono::Duration;

const UNITS: [(i64, &str); 5] = [
    (86_400_000, "d"),
    (3_600_000, "h"),
    (60_000, "m"),
    (1_000, "s"),
    (1, "ms"),
];

/// Break a duration into `d`, `h`, `m`, `s`, `ms` parts, e.g. `1d2h3m4s5ms`.
/// Zero parts are skipped; a zero duration renders as `0ms`.
pub fn format_duration(d: Duration) -> String {
    format_millis(d.num_milliseconds())
}

/// Same as [`format_duration`] for a raw millisecond count. Negative values get a
/// leading `-`.
pub fn format_millis(millis: i64) -> String {
    if millis == 0 {
        return "0ms".into();
    }

    let mut out = String::new();
    if millis < 0 {
        out.push('-');
    }

    let mut rest = millis.unsigned_abs();
    for (unit, suffix) in UNITS {
        let unit = unit as u64;
        let n = rest / unit;
        rest %= unit;
        if n > 0 {
            let _ = write!(out, "{n}{suffix}");
        }
    }
    out
}

/// Render with `,` every three digits, independent of locale.
pub fn group_thousands(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
