//! Millisecond epoch-time normalization
//!
//! Every timestamp crossing the gateway boundary is unsigned milliseconds
//! since the Unix epoch. Native scales (fractional seconds, `SystemTime`)
//! are converted here so all platforms agree on the wire value.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Convert a native `SystemTime` to epoch milliseconds. Times before the
/// epoch (or otherwise unrepresentable) normalize to `0`.
pub fn system_time_to_millis(time: SystemTime) -> u64 {
    let datetime: DateTime<Utc> = time.into();
    datetime.timestamp_millis().max(0) as u64
}

/// Convert fractional native seconds to epoch milliseconds, truncating.
pub fn seconds_to_millis(seconds: f64) -> u64 {
    if seconds <= 0.0 {
        return 0;
    }
    (seconds * 1000.0) as u64
}
