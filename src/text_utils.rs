use chrono::{NaiveDateTime, Offset, TimeDelta, TimeZone};
#[cfg(test)]
use chrono::{DateTime, Local};

use crate::error::{Result, ScaffoldError};

/// Accepted date argument, e.g. `January 1 2001 15:30`
pub const POST_DATE_FORMAT: &str = "%B %d %Y %H:%M";

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Joins the free-form command line words into one date string.
/// Returns None when nothing was given.
pub fn join_date_args(args: &[String]) -> Option<String> {
    let joined = args.join(" ");
    let joined = joined.trim();
    if joined.is_empty() {
        return None;
    }
    Some(joined.to_string())
}

/// Parses a `Month DD YYYY HH:MM` string as local time and returns the
/// Unix epoch in seconds.
pub fn parse_post_date(buf: &str) -> Result<f64> {
    parse_post_date_in(&chrono::Local, buf)
}

pub fn parse_post_date_in<Tz: TimeZone>(tz: &Tz, buf: &str) -> Result<f64> {
    let parse_err = |reason: String| ScaffoldError::ArgumentParse {
        input: buf.to_string(),
        reason,
    };

    // chrono's %B also takes "Jan"; only full names are accepted
    let month = buf.split_whitespace().next().unwrap_or_default();
    if !MONTH_NAMES.iter().any(|m| m.eq_ignore_ascii_case(month)) {
        return Err(parse_err(format!("'{}' is not a month name", month)));
    }

    let naive = NaiveDateTime::parse_from_str(buf.trim(), POST_DATE_FORMAT)
        .map_err(|e| parse_err(e.to_string()))?;

    Ok(local_timestamp(tz, &naive) as f64)
}

/// Ambiguous times (DST fold) resolve to the earlier instant. Times skipped by
/// a DST gap keep the offset in effect before the transition.
fn local_timestamp<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> i64 {
    if let Some(local) = tz.from_local_datetime(naive).earliest() {
        return local.timestamp();
    }

    let before = *naive - TimeDelta::days(1);
    let offset = tz.offset_from_local_datetime(&before)
        .earliest()
        .map(|o| o.fix().local_minus_utc())
        .unwrap_or(0);
    naive.and_utc().timestamp() - offset as i64
}

/// Formats an epoch the way post headers store it: shortest decimal form,
/// always with a fractional part.
pub fn format_epoch(epoch: f64) -> String {
    if epoch.is_finite() && epoch.fract() == 0.0 {
        format!("{:.1}", epoch)
    } else {
        epoch.to_string()
    }
}

#[cfg(test)]
pub(crate) fn epoch_to_local(epoch: f64) -> Option<DateTime<Local>> {
    let secs = epoch.floor();
    let nanos = ((epoch - secs) * 1e9) as u32;
    Local.timestamp_opt(secs as i64, nanos).single()
}
