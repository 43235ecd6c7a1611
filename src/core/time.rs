//! Elapsed-time parsing and formatting.
//!
//! Comment timestamps are offsets from the start of a stream, written as
//! `H:M:S` or `M:S` with unsigned integer components.

use super::errors::{Error, Result};
use std::time::Duration;

/// Parse an elapsed-time string (`H:M:S` or `M:S`) into a duration.
pub fn parse_elapsed(value: &str) -> Result<Duration> {
    elapsed_seconds(value).map(Duration::from_secs)
}

/// Parse an elapsed-time string into whole seconds.
pub fn elapsed_seconds(value: &str) -> Result<u64> {
    let parts = value
        .trim()
        .split(':')
        .map(|part| parse_component(value, part))
        .collect::<Result<Vec<u64>>>()?;

    let seconds = match parts.as_slice() {
        [h, m, s] => h
            .checked_mul(3600)
            .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(*s)),
        [m, s] => m.checked_mul(60).and_then(|m| m.checked_add(*s)),
        _ => {
            return Err(invalid(
                value,
                format!("expected H:M:S or M:S, got {} component(s)", parts.len()),
            ))
        }
    };

    seconds.ok_or_else(|| invalid(value, "value overflows"))
}

fn parse_component(value: &str, part: &str) -> Result<u64> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            value,
            format!("'{part}' is not a non-negative integer"),
        ));
    }
    part.parse::<u64>()
        .map_err(|e| invalid(value, e.to_string()))
}

fn invalid(value: &str, message: impl Into<String>) -> Error {
    Error::InvalidTime {
        value: value.to_string(),
        message: message.into(),
    }
}

/// Format a duration as `H:MM:SS`, with milliseconds when the duration is fractional.
pub fn format_elapsed(duration: Duration) -> String {
    let total = duration.as_secs();
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    match duration.subsec_millis() {
        0 => format!("{h}:{m:02}:{s:02}"),
        ms => format!("{h}:{m:02}:{s:02}.{ms:03}"),
    }
}

/// Format whole seconds as `H:MM:SS`.
pub fn format_seconds(seconds: u64) -> String {
    format_elapsed(Duration::from_secs(seconds))
}

/// Serde adapter storing a `Duration` as fractional seconds.
pub mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
