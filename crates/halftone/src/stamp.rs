//! Caption text for the print composite.

use chrono::{DateTime, TimeZone};

/// Header lines, drawn centered above the photo.
pub const HEADER_LINES: [&str; 2] = ["Record to Memory Box", "記録を記憶に"];

/// Footer lines, drawn left-aligned below the photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCaptions {
    pub date: String,
    pub place: String,
}

impl PrintCaptions {
    /// Captions stamped with the capture time.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>, place: impl Into<String>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: date_stamp(now),
            place: place.into(),
        }
    }
}

/// Format a capture time as `Date : YYYY/MM/DD HH:MM:SS`.
pub fn date_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("Date : %Y/%m/%d %H:%M:%S").to_string()
}
