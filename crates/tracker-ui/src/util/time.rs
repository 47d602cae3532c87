use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses the backend's `deliveredAt` string.
///
/// The backend serializes a `LocalDateTime` without a zone marker, so both
/// RFC 3339 and the bare variant are accepted; bare values are taken as UTC.
pub fn parse_backend_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn relative_time(old: DateTime<Utc>, new: DateTime<Utc>) -> String {
    let duration = new.signed_duration_since(old);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    match duration.num_seconds() {
        0..=59 => "just now".to_string(),
        60..=3599 => {
            let s = if minutes == 1 { "" } else { "s" };
            format!("{minutes} min{s} ago")
        }
        3600..=86399 => {
            let s = if hours == 1 { "" } else { "s" };
            format!("{hours} hour{s} ago")
        }
        _ => {
            let s = if days == 1 { "" } else { "s" };
            format!("{days} day{s} ago")
        }
    }
}
