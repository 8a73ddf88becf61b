use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Formats accepted by [`parse_datetime`], tried in order
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Resolve a wall-clock date/time in `zone` to a concrete instant
pub fn resolve_local(naive: &NaiveDateTime, zone: &Tz) -> Result<DateTime<Tz>> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(dt1, _dt2) => Ok(dt1), // Use earliest during DST transition
        LocalResult::None => Err(Error::invalid_argument(
            "datetime",
            format!("{} does not exist in {} (DST transition)", naive, zone),
        )),
    }
}

/// Parse an IANA timezone name
pub fn parse_timezone(tz_str: &str) -> Result<Tz> {
    tz_str
        .parse()
        .map_err(|_| Error::invalid_argument("timezone", tz_str))
}

/// Parse a date/time such as `2021-04-20 16:20`
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| {
            Error::invalid_argument(
                "datetime",
                format!("expected YYYY-MM-DD HH:MM, got '{}'", input),
            )
        })
}
