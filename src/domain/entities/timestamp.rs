use chrono::{DateTime, Utc};

/// Stored shape of `created_at`: ISO-8601, UTC, microsecond precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The `YYYY-MM-DD` prefix shown in listings. Shorter or missing values pass
/// through unchanged (missing becomes empty).
pub fn date_part(created_at: Option<&str>) -> &str {
    let ts = created_at.unwrap_or("");
    ts.get(..10).unwrap_or(ts)
}
