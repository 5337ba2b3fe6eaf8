#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{NaiveDate, Utc};

/// Parse the date part of an ISO-8601 value (`2025-03-10` or
/// `2025-03-10T00:00:00Z`).
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format an ISO-8601 date for display as `dd/MM/yyyy`.
///
/// Unparseable input falls back to a neutral placeholder instead of
/// failing the whole row.
pub fn format_display(value: &str) -> String {
    parse_iso_date(value)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "Sem data".to_owned())
}

/// Convert a `<input type="date">` value (`YYYY-MM-DD`) into the ISO
/// datetime the project boundary expects. Returns `None` for anything
/// that is not a date.
pub fn date_input_to_iso(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
}

/// Whether a date-input value lies before `today`. Used by the submit
/// form, which rejects start dates in the past.
pub fn is_before(value: &str, today: NaiveDate) -> bool {
    parse_iso_date(value.trim()).is_some_and(|date| date < today)
}

/// Today's date from the crate's single time source.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
