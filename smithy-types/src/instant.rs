/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds since the Unix epoch plus sub-second nanoseconds.
///
/// `subsecond_nanos` is always in `0..1_000_000_000`, so instants before the epoch have a
/// negative `seconds` and a positive fraction counting forward from it.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an `Instant` from whole seconds and a fraction in `0.0..1.0`.
    ///
    /// Fractions that round up to a full second are clamped to the last nanosecond.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: subsecond_nanos.min(NANOS_PER_SECOND - 1),
        }
    }

    /// Creates an `Instant`, carrying whole seconds out of `subsecond_nanos`.
    ///
    /// Returns `None` if the carry overflows the seconds.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Option<Self> {
        let seconds = seconds.checked_add((subsecond_nanos / NANOS_PER_SECOND) as i64)?;
        Some(Instant {
            seconds,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        })
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant {
                        seconds: seconds - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    /// Parses an `Instant` from its string form in the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|dt| Instant::from_chrono(&dt.with_timezone(&Utc)))
                .map_err(|_| ParseError::new(s, format)),
            Format::EpochSeconds => parse_epoch_seconds(s).ok_or_else(|| ParseError::new(s, format)),
        }
    }

    /// Converts this instant to a `chrono` date time.
    ///
    /// Returns `None` when the instant is outside of the range `chrono` can represent.
    pub fn to_chrono(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn from_chrono(time: &DateTime<Utc>) -> Self {
        // leap seconds report nanos past one second; chrono's range is far from the i64 bounds
        let nanos = time.timestamp_subsec_nanos();
        Instant {
            seconds: time.timestamp() + (nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: nanos % NANOS_PER_SECOND,
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats this instant. Instants `chrono` cannot represent fall back to epoch seconds.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(time) if self.has_nanos() => {
                    let rfc3339 = time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                    let mut rfc3339 = rfc3339.trim_end_matches('Z').trim_end_matches('0').to_owned();
                    rfc3339.push('Z');
                    rfc3339
                }
                Some(time) => time.to_rfc3339_opts(SecondsFormat::Secs, true),
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else if self.seconds < 0 {
                    let fraction = format!("{:0>9}", NANOS_PER_SECOND - self.subsecond_nanos);
                    format!("-{}.{}", -(self.seconds + 1), fraction.trim_end_matches('0'))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(time: DateTime<Utc>) -> Self {
        Instant::from_chrono(&time)
    }
}

fn parse_epoch_seconds(s: &str) -> Option<Instant> {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (s, ""),
    };
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let seconds: i64 = whole.parse().ok()?;
    let nanos = match fraction {
        "" => 0,
        digits => format!("{:0<9}", digits).parse::<u32>().ok()?,
    };
    if nanos == 0 {
        Some(Instant::from_epoch_seconds(seconds))
    } else if whole.starts_with('-') {
        Some(Instant {
            seconds: seconds.checked_sub(1)?,
            subsecond_nanos: NANOS_PER_SECOND - nanos,
        })
    } else {
        Some(Instant {
            seconds,
            subsecond_nanos: nanos,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Fractional seconds since the Unix epoch, e.g. `1576540098.52`
    EpochSeconds,
}

/// Failure to parse an [`Instant`] from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    format: Format,
}

impl ParseError {
    fn new(input: &str, format: Format) -> Self {
        Self {
            input: input.to_owned(),
            format,
        }
    }

    /// The string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = match self.format {
            Format::DateTime => "an RFC 3339 date-time",
            Format::EpochSeconds => "epoch seconds",
        };
        write!(f, "`{}` is not {}", self.input, expected)
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::proptest;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn whole_seconds_keep_trailing_zero() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.subsecond_nanos(), 500_000_000);
        assert_eq!(instant.epoch_fractional_seconds(), -1.5);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
    }

    #[test]
    fn parse_date_time() {
        let parsed = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(parsed, Instant::from_fractional_seconds(1576540098, 0.52));
        Instant::from_str("yesterday", Format::DateTime).expect_err("not a date");
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000).unwrap()
        );
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds).unwrap(),
            Instant::from_f64(-1.5)
        );
        let err = Instant::from_str("12.x", Format::EpochSeconds).expect_err("bad fraction");
        assert_eq!(err.input(), "12.x");
    }

    #[test]
    fn out_of_range_seconds_are_rejected() {
        Instant::from_str("-9223372036854775808.5", Format::EpochSeconds)
            .expect_err("one second before i64::MIN");
        Instant::from_str("9223372036854775808", Format::EpochSeconds).expect_err("past i64::MAX");
        assert_eq!(
            Instant::from_str("-9223372036854775808", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(i64::MIN)
        );
        assert_eq!(
            Instant::from_str("-9223372036854775807.5", Format::EpochSeconds).unwrap(),
            Instant::from_fractional_seconds(i64::MIN, 0.5)
        );
    }

    #[test]
    fn carrying_nanos_checks_for_overflow() {
        assert_eq!(Instant::from_secs_and_nanos(i64::MAX, 1_000_000_000), None);
        assert_eq!(
            Instant::from_secs_and_nanos(i64::MAX - 1, 1_500_000_000),
            Some(Instant::from_fractional_seconds(i64::MAX, 0.5))
        );
        assert_eq!(
            Instant::from_fractional_seconds(i64::MAX, 0.9999999999),
            Instant::from_secs_and_nanos(i64::MAX, 999_999_999).unwrap()
        );
    }

    #[test]
    fn converts_from_chrono() {
        let time = Utc.timestamp_opt(1576540098, 520_000_000).unwrap();
        let instant = Instant::from(time);
        assert_eq!(instant, Instant::from_fractional_seconds(1576540098, 0.52));
        assert_eq!(instant.to_chrono(), Some(time));
    }

    #[test]
    fn instants_order_chronologically() {
        let earlier = Instant::from_f64(-0.25);
        let later = Instant::from_epoch_seconds(0);
        assert!(earlier < later);
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in -62_135_596_800i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos).unwrap();
            let formatted = instant.fmt(Format::EpochSeconds);
            assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }

        #[test]
        fn date_time_round_trip(seconds in 0i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos).unwrap();
            let formatted = instant.fmt(Format::DateTime);
            assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }
    }
}
