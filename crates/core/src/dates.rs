//! Calendar date helpers
//!
//! Dates travel through the system as zero-padded `YYYY-MM-DD` strings, so
//! lexicographic order on them equals chronological order. Day arithmetic
//! goes through a proleptic Gregorian day count instead of timestamp
//! subtraction, which keeps night totals stable across DST transitions.

use chrono::{Datelike, Local, NaiveDate};

/// Splits a strict numeric triple on the given separator.
///
/// Every field must be non-empty and all digits; trailing garbage fails the
/// parse rather than being ignored.
fn parse_triple(input: &str, sep: char) -> Option<(i64, i64, i64)> {
    let mut parts = input.split(sep);
    let a = parts.next()?;
    let b = parts.next()?;
    let c = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    for field in [a, b, c] {
        if field.is_empty() || !field.bytes().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
    }
    Some((a.parse().ok()?, b.parse().ok()?, c.parse().ok()?))
}

/// Checks a `YYYY-MM-DD` date for acceptable ranges.
///
/// Year must be >= 2024, month 1-12, day 1-31. Deliberately permissive:
/// there is no month-length or leap-year check.
pub fn validate(date: &str) -> bool {
    match parse_triple(date, '-') {
        Some((y, m, d)) => y >= 2024 && (1..=12).contains(&m) && (1..=31).contains(&d),
        None => false,
    }
}

/// Normalizes `YYYY-MM-DD` or `DD/MM/YYYY` input to zero-padded
/// `YYYY-MM-DD`. `None` is the invalid-input sentinel callers must check.
pub fn normalize(input: &str) -> Option<String> {
    let (y, m, d) = match parse_triple(input, '-') {
        Some(triple) => triple,
        None => {
            let (d, m, y) = parse_triple(input, '/')?;
            (y, m, d)
        }
    };
    Some(format!("{:04}-{:02}-{:02}", y, m, d))
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
///
/// Out-of-range days extrapolate linearly, so the 30th of February counts
/// as two days past the 28th, matching how the permissive date rules treat
/// such inputs everywhere else.
fn civil_days(y: i64, m: i64, d: i64) -> i64 {
    let y = y - i64::from(m <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Number of nights between two normalized dates (check_out - check_in)
pub fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let (y1, m1, d1) = parse_triple(check_in, '-')?;
    let (y2, m2, d2) = parse_triple(check_out, '-')?;
    Some(civil_days(y2, m2, d2) - civil_days(y1, m1, d1))
}

/// Current local date as a zero-padded `YYYY-MM-DD` string
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Whether a normalized date is today or later
pub fn is_today_or_future(date: &str) -> bool {
    date >= today().as_str()
}

// Offset between the 1970 epoch and chrono's day-1 = 0001-01-01 numbering.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Monday and Sunday of the week containing the given date
pub fn week_range(date: &str) -> Option<(String, String)> {
    let (y, m, d) = parse_triple(date, '-')?;
    let days = civil_days(y, m, d) + EPOCH_DAYS_FROM_CE;
    let day = NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)?;

    let monday = day - chrono::Duration::days(day.weekday().num_days_from_monday() as i64);
    let sunday = monday + chrono::Duration::days(6);
    Some((
        monday.format("%Y-%m-%d").to_string(),
        sunday.format("%Y-%m-%d").to_string(),
    ))
}
