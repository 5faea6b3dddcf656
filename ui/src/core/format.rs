//! Formatting helpers for presenting timestamps and people.

use api::Millis;
use time::{macros::format_description, OffsetDateTime};

/// Render a server timestamp (ms since epoch) as `YYYY-MM-DD HH:MM` in UTC.
pub fn format_time(ms: Millis) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|ts| {
            ts.format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]"
            ))
            .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}

/// Join names for a sentence: `a`, `a and b`, `a, b and c`.
pub fn format_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head = head.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
            format!("{head} and {}", last.as_ref())
        }
    }
}
