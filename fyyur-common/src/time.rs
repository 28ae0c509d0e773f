//! Show time parsing and formatting
//!
//! Show start times are stored as naive local timestamps. The canonical text
//! form (`YYYY-MM-DD HH:MM:SS`) is what query projections hand to pages.

use chrono::{Local, NaiveDateTime, Timelike};

/// Canonical text form of a show start time
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats accepted from the create-show form
const ACCEPTED_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Current wall-clock time, used to split upcoming from past shows
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a start time in canonical text form
pub fn format_show_time(time: NaiveDateTime) -> String {
    time.format(SHOW_TIME_FORMAT).to_string()
}

/// Parse a start time from form input, truncated to whole seconds
pub fn parse_show_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ACCEPTED_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|t| t.with_nanosecond(0))
}

/// Display style for show times on pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
}

/// Human-readable rendering of a canonical start time string
///
/// Strings that do not parse are returned unchanged.
pub fn display_show_time(canonical: &str, format: DisplayFormat) -> String {
    let Some(time) = parse_show_time(canonical) else {
        return canonical.to_string();
    };

    let pattern = match format {
        DisplayFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        DisplayFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    time.format(pattern).to_string()
}
