//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// UTC timestamp used for `lastUpdated` and `serverTime`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to millisecond precision.
///
/// The wire format only carries milliseconds, so truncating here keeps an
/// in-memory value equal to what a client reads back.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp as RFC 3339 with milliseconds and a `Z` suffix,
/// e.g. `2026-10-19T08:15:30.123Z`.
#[must_use]
pub fn to_iso8601(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serde(with = ...)` serializer for the millisecond ISO-8601 wire format.
pub mod iso8601 {
    use serde::Serializer;

    use super::Timestamp;

    /// Serialize a timestamp via [`to_iso8601`](super::to_iso8601).
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_iso8601(ts))
    }
}
