//! Timestamp parsing for content records without timezone dependencies.
//!
//! The record store emits `created_at` in a handful of ISO 8601 shapes:
//!
//! ```text
//! 2024-06-15
//! 2024-06-15T14:30:45Z
//! 2024-06-15T14:30:45.123456+00:00
//! 2024-06-15 14:30:45+05:30
//! ```
//!
//! `Timestamp` keeps the wall-clock fields and the UTC offset as written,
//! which is all that `article:published_time`, sitemap `lastmod` and the
//! prerendered byline need.

use anyhow::{Result, bail};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Wall-clock datetime with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset from UTC in minutes (`+05:30` is 330).
    pub offset_minutes: i16,
}

impl Timestamp {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_minutes: 0,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a date or RFC 3339 style datetime.
    ///
    /// Fractional seconds are accepted and dropped. A missing offset is UTC.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        let mut ts = Self::from_ymd(year, month, day);

        if bytes.len() > 10 {
            if !matches!(bytes[10], b'T' | b't' | b' ') || bytes.len() < 19 {
                return None;
            }
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            ts.hour = parse_u8(&bytes[11..13])?;
            ts.minute = parse_u8(&bytes[14..16])?;
            ts.second = parse_u8(&bytes[17..19])?;
            ts.offset_minutes = parse_offset(&s[19..])?;
        }

        ts.validate().ok()?;
        Some(ts)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_minutes,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        if offset_minutes.abs() > 18 * 60 {
            bail!("offset is invalid: {offset_minutes}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// `YYYY-MM-DD`, used for sitemap `lastmod`.
    pub fn to_date(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `YYYY-MM-DDTHH:MM:SSZ` or `YYYY-MM-DDTHH:MM:SS+HH:MM`.
    pub fn to_rfc3339(self) -> String {
        let offset = if self.offset_minutes == 0 {
            "Z".to_string()
        } else {
            let sign = if self.offset_minutes < 0 { '-' } else { '+' };
            let abs = self.offset_minutes.unsigned_abs();
            format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
        };
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{offset}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Seconds since the Unix epoch, offset applied. Used for ordering.
    pub fn unix_seconds(self) -> i64 {
        // days_from_civil (Howard Hinnant)
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let m = i64::from(self.month);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        let days = era * 146_097 + doe - 719_468;

        days * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
            - i64::from(self.offset_minutes) * 60
    }

    /// Human-readable date: `June 15, 2024`.
    pub fn to_long_date(self) -> String {
        let month = MONTH_NAMES[usize::from(self.month - 1)];
        format!("{month} {}, {}", self.day, self.year)
    }
}

/// Parse the tail after `HH:MM:SS`: optional fraction, then `Z`, `±HH:MM`,
/// `±HHMM`, `±HH` or nothing.
fn parse_offset(rest: &str) -> Option<i16> {
    let rest = match rest.strip_prefix('.') {
        Some(frac) => frac.trim_start_matches(|c: char| c.is_ascii_digit()),
        None => rest,
    };

    match rest {
        "" | "Z" | "z" => return Some(0),
        _ => {}
    }

    let sign: i16 = match rest.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits: Vec<u8> = rest[1..].bytes().filter(|b| *b != b':').collect();
    let (hours, minutes) = match digits.len() {
        2 => (parse_u8(&digits)?, 0),
        4 => (parse_u8(&digits[0..2])?, parse_u8(&digits[2..4])?),
        _ => return None,
    };
    if minutes > 59 {
        return None;
    }
    Some(sign * (i16::from(hours) * 60 + i16::from(minutes)))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let ts = Timestamp::parse("2024-06-15").unwrap();
        assert_eq!(ts, Timestamp::from_ymd(2024, 6, 15));
        assert_eq!(ts.to_rfc3339(), "2024-06-15T00:00:00Z");
    }

    #[test]
    fn test_parse_utc() {
        let ts = Timestamp::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(ts, Timestamp::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_fraction_and_offset() {
        let ts = Timestamp::parse("2024-01-15T10:30:00.123456+00:00").unwrap();
        assert_eq!(ts.offset_minutes, 0);
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00Z");

        let ts = Timestamp::parse("2024-01-15 10:30:00+05:30").unwrap();
        assert_eq!(ts.offset_minutes, 330);
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00+05:30");

        let ts = Timestamp::parse("2024-01-15T10:30:00-0800").unwrap();
        assert_eq!(ts.offset_minutes, -480);
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00-08:00");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Timestamp::parse("").is_none());
        assert!(Timestamp::parse("2024/06/15").is_none());
        assert!(Timestamp::parse("2024-13-01").is_none());
        assert!(Timestamp::parse("2023-02-29").is_none());
        assert!(Timestamp::parse("2024-06-15T25:00:00Z").is_none());
        assert!(Timestamp::parse("2024-06-15T10:00:00 UTC").is_none());
        assert!(Timestamp::parse("2024-06-15X").is_none());
    }

    #[test]
    fn test_leap_year() {
        assert!(Timestamp::parse("2024-02-29").is_some());
        assert!(Timestamp::parse("2000-02-29").is_some());
        assert!(Timestamp::parse("1900-02-29").is_none());
    }

    #[test]
    fn test_formatting() {
        let ts = Timestamp::new(2024, 6, 5, 9, 3, 1);
        assert_eq!(ts.to_date(), "2024-06-05");
        assert_eq!(ts.to_long_date(), "June 5, 2024");
    }

    #[test]
    fn test_unix_seconds() {
        assert_eq!(Timestamp::from_ymd(1970, 1, 1).unix_seconds(), 0);
        assert_eq!(Timestamp::from_ymd(2000, 3, 1).unix_seconds(), 951_868_800);

        let utc = Timestamp::parse("2024-06-15T12:00:00Z").unwrap();
        let ist = Timestamp::parse("2024-06-15T17:30:00+05:30").unwrap();
        assert_eq!(utc.unix_seconds(), ist.unix_seconds());
    }
}
