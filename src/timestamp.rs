//! Discord timestamp tags (`<t:EPOCH:STYLE>`).
//!
//! The tag only carries Unix seconds and a one-letter style; every client
//! renders it in the reader's own locale and timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::timezone::resolve_local;

/// How a client renders a timestamp tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimestampStyle {
    /// `16:20`
    ShortTime,
    /// `16:20:30`
    LongTime,
    /// `20/04/2021`
    ShortDate,
    /// `20 April 2021`
    LongDate,
    /// `20 April 2021 16:20`
    #[default]
    ShortDateTime,
    /// `Tuesday, 20 April 2021 16:20`
    LongDateTime,
    /// `2 months ago`
    Relative,
}

impl TimestampStyle {
    pub const ALL: [TimestampStyle; 7] = [
        TimestampStyle::ShortTime,
        TimestampStyle::LongTime,
        TimestampStyle::ShortDate,
        TimestampStyle::LongDate,
        TimestampStyle::ShortDateTime,
        TimestampStyle::LongDateTime,
        TimestampStyle::Relative,
    ];

    pub fn code(self) -> char {
        match self {
            TimestampStyle::ShortTime => 't',
            TimestampStyle::LongTime => 'T',
            TimestampStyle::ShortDate => 'd',
            TimestampStyle::LongDate => 'D',
            TimestampStyle::ShortDateTime => 'f',
            TimestampStyle::LongDateTime => 'F',
            TimestampStyle::Relative => 'R',
        }
    }

    /// Human readable name, used in command output
    pub fn label(self) -> &'static str {
        match self {
            TimestampStyle::ShortTime => "Short time",
            TimestampStyle::LongTime => "Long time",
            TimestampStyle::ShortDate => "Short date",
            TimestampStyle::LongDate => "Long date",
            TimestampStyle::ShortDateTime => "Short date/time",
            TimestampStyle::LongDateTime => "Long date/time",
            TimestampStyle::Relative => "Relative",
        }
    }
}

impl TryFrom<char> for TimestampStyle {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        match code {
            't' => Ok(TimestampStyle::ShortTime),
            'T' => Ok(TimestampStyle::LongTime),
            'd' => Ok(TimestampStyle::ShortDate),
            'D' => Ok(TimestampStyle::LongDate),
            'f' => Ok(TimestampStyle::ShortDateTime),
            'F' => Ok(TimestampStyle::LongDateTime),
            'R' => Ok(TimestampStyle::Relative),
            other => Err(Error::invalid_argument("style", other.to_string())),
        }
    }
}

impl FromStr for TimestampStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => TimestampStyle::try_from(code),
            _ => Err(Error::invalid_argument("style", s)),
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unix seconds paired with a render style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampTag {
    epoch: i64,
    style: TimestampStyle,
}

impl TimestampTag {
    pub fn new(epoch: i64, style: TimestampStyle) -> Self {
        Self { epoch, style }
    }

    pub fn from_datetime<Z: TimeZone>(instant: &DateTime<Z>, style: TimestampStyle) -> Self {
        Self::new(instant.timestamp(), style)
    }

    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    pub fn style(&self) -> TimestampStyle {
        self.style
    }
}

impl fmt::Display for TimestampTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<t:{}:{}>", self.epoch, self.style.code())
    }
}

impl FromStr for TimestampTag {
    type Err = Error;

    /// Parses `<t:EPOCH:STYLE>` or `<t:EPOCH>`, which Discord renders as `f`
    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix("<t:")
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| Error::invalid_argument("tag", s))?;

        let (epoch, style) = match body.split_once(':') {
            Some((epoch, code)) => (epoch, code.parse()?),
            None => (body, TimestampStyle::default()),
        };

        // `i64` parsing accepts a leading `+`, Discord never writes one
        if epoch.starts_with('+') {
            return Err(Error::invalid_argument("tag", s));
        }
        let epoch = epoch
            .parse::<i64>()
            .map_err(|_| Error::invalid_argument("tag", s))?;

        Ok(Self::new(epoch, style))
    }
}

/// Format an instant as a timestamp tag
pub fn format<Z: TimeZone>(instant: &DateTime<Z>, style: TimestampStyle) -> String {
    TimestampTag::from_datetime(instant, style).to_string()
}

/// Format an instant using a one-letter style code (`t T d D f F R`)
pub fn format_code<Z: TimeZone>(instant: &DateTime<Z>, code: &str) -> Result<String> {
    let style = code.parse::<TimestampStyle>()?;
    Ok(format(instant, style))
}

/// Format an instant with the short date/time style (`f`)
pub fn format_default<Z: TimeZone>(instant: &DateTime<Z>) -> String {
    format(instant, TimestampStyle::default())
}

/// Format an offset-less date/time, read as UTC
pub fn format_naive_utc(naive: &NaiveDateTime, style: TimestampStyle) -> String {
    format(&naive.and_utc(), style)
}

/// Format a wall-clock date/time as seen in `zone`
pub fn format_local(naive: &NaiveDateTime, zone: &Tz, style: TimestampStyle) -> Result<String> {
    let instant = resolve_local(naive, zone)?;
    Ok(format(&instant, style))
}
