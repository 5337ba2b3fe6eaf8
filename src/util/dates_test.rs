use super::*;

// =============================================================
// format_display
// =============================================================

#[test]
fn formats_iso_datetime_for_display() {
    assert_eq!(format_display("2025-03-10T00:00:00Z"), "10/03/2025");
}

#[test]
fn formats_bare_iso_date_for_display() {
    assert_eq!(format_display("2024-11-02"), "02/11/2024");
}

#[test]
fn unparseable_dates_fall_back_to_placeholder() {
    assert_eq!(format_display(""), "Sem data");
    assert_eq!(format_display("amanhã"), "Sem data");
    assert_eq!(format_display("2025-13-40"), "Sem data");
}

// =============================================================
// date_input_to_iso
// =============================================================

#[test]
fn date_input_becomes_midnight_utc() {
    assert_eq!(
        date_input_to_iso("2025-03-10").as_deref(),
        Some("2025-03-10T00:00:00Z")
    );
}

#[test]
fn invalid_date_input_is_rejected() {
    assert_eq!(date_input_to_iso(""), None);
    assert_eq!(date_input_to_iso("10/03/2025"), None);
}

// =============================================================
// is_before
// =============================================================

#[test]
fn dates_before_today_are_flagged() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("date");
    assert!(is_before("2025-03-09", today));
    assert!(!is_before("2025-03-10", today));
    assert!(!is_before("2025-03-11", today));
}

#[test]
fn unparseable_values_are_not_flagged_as_past() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("date");
    assert!(!is_before("", today));
}
