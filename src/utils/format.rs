// src/utils/format.rs
use chrono::{DateTime, TimeZone};

/// `passwords_<YYYYMMDD_HHMMSS>.txt` for the given instant.
pub fn export_filename<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("passwords_{}.txt", time.format("%Y%m%d_%H%M%S"))
}

/// Whether `name` has the shape produced by [`export_filename`].
pub fn is_export_filename(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix("passwords_")
        .and_then(|rest| rest.strip_suffix(".txt"))
    else {
        return false;
    };

    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit)
}
