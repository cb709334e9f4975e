//! Helper functions shared by the command and reminder paths.

use chrono::{NaiveDate, Utc};

/// Parse a user-supplied date in `YYYY-MM-DD` form.
pub fn parse_event_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Whether the date lies strictly before today (UTC).
pub fn is_past_date(date: NaiveDate) -> bool {
    date < Utc::now().date_naive()
}

/// Human label for the event scope shown in confirmations and reminders.
pub fn scope_label(is_group_event: bool) -> &'static str {
    if is_group_event {
        "👥 Group"
    } else {
        "👤 Personal"
    }
}
