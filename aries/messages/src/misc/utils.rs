use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serializes a timestamp as RFC 3339 with a `Z` offset, keeping as many
/// fractional digits as needed to represent it exactly, e.g.
/// `2024-03-01T10:20:30Z` or `2024-03-01T10:20:30.123456Z`.
pub(crate) fn serialize_opt_datetime<S>(
    dt: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => serializer.serialize_none(),
    }
}
