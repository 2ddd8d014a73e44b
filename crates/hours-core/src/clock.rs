//! Wall-clock parsing and duration arithmetic.
//!
//! Timestamps in the log are bare `HHhMM` clock times with no date component.
//! Durations are clock-time differences only; the `date:` header above them
//! is a grouping label, never parsed into a calendar date.

use chrono::{Duration, NaiveTime};

/// Parses a `HHhMM` timestamp (24-hour clock, e.g. `14h05`).
pub fn parse_clock(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%Hh%M")
}

/// Computes the elapsed time of a start/stop pair.
///
/// When the stop time is clock-earlier than the start time the session
/// crossed midnight, and the duration is recomputed as
/// `(23:59 - start) + (stop - 00:00) + 1 minute`. The extra minute stands in
/// for the 23:59-00:00 boundary minute the two partial spans miss; the
/// approximation is kept as-is for compatibility with existing logs.
#[must_use]
pub fn session_duration(start: NaiveTime, stop: NaiveTime) -> Duration {
    let duration = stop - start;
    if duration >= Duration::zero() {
        return duration;
    }

    // from_hms_opt cannot fail on literal in-range arguments
    let pre_midnight = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    (pre_midnight - start) + (stop - midnight) + Duration::minutes(1)
}

/// Formats a duration as "Xh Ym" if >= 1 hour, "Xm" otherwise.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
