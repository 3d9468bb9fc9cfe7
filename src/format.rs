//! Wire formats for fields whose JSON shape differs from their Rust type.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// RFC 3339 in UTC with millisecond precision, e.g. `2020-07-09T20:11:00.000Z`.
pub fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Aggregate counts travel as decimal strings (`"11"`), the way Postgres `bigint`
/// counts reach JSON clients.
pub fn serialize_count<S>(count: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(count)
}
