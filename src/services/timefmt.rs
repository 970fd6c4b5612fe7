//! Local-time formatting for filesystem modification instants

use chrono::{Local, LocalResult, TimeZone};
use std::time::SystemTime;

/// Column width of a formatted timestamp; the sentinel pads to the same
/// width so rendered columns stay aligned.
pub const TIMESTAMP_WIDTH: usize = 19;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sentinel for instants that cannot be converted to local calendar time
#[must_use]
pub fn unavailable() -> String {
    format!("{:<width$}", "unavailable", width = TIMESTAMP_WIDTH)
}

/// Convert a modification instant to a fixed-width local calendar string.
///
/// Conversion failure (out-of-range arithmetic, nonexistent local time)
/// yields the `unavailable` sentinel instead of an error. Safe to call from
/// any thread; no shared calendar-conversion state is involved.
#[must_use]
pub fn format_instant(instant: SystemTime) -> String {
    let (secs, nanos) = unix_parts(instant);
    match Local.timestamp_opt(secs, nanos) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format(TIMESTAMP_FORMAT).to_string()
        }
        LocalResult::None => unavailable(),
    }
}

/// Signed seconds/nanos since the Unix epoch; instants before the epoch come
/// back negative.
fn unix_parts(instant: SystemTime) -> (i64, u32) {
    match instant.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => (i64::try_from(d.as_secs()).unwrap_or(i64::MAX), d.subsec_nanos()),
        Err(err) => {
            let d = err.duration();
            let secs = i64::try_from(d.as_secs()).unwrap_or(i64::MAX);
            let nanos = d.subsec_nanos();
            if nanos == 0 {
                (-secs, 0)
            } else {
                (-secs - 1, 1_000_000_000 - nanos)
            }
        }
    }
}
