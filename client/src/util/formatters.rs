//! Display helpers for student fields (Romanian labels).

#[cfg(test)]
#[path = "formatters_test.rs"]
mod formatters_test;

use chrono::{Datelike, NaiveDate};

use crate::state::roster::StudentStatus;

const MONTHS_RO: [&str; 12] = [
    "ianuarie",
    "februarie",
    "martie",
    "aprilie",
    "mai",
    "iunie",
    "iulie",
    "august",
    "septembrie",
    "octombrie",
    "noiembrie",
    "decembrie",
];

const AVATAR_COLORS: [&str; 8] = ["#667EEA", "#4299E1", "#48BB78", "#ED8936", "#F56565", "#38B2AC", "#D69E2E", "#9F7AEA"];

#[must_use]
pub fn status_label(status: StudentStatus) -> &'static str {
    match status {
        StudentStatus::Active => "Activ",
        StudentStatus::Inactive => "Inactiv",
        StudentStatus::Graduated => "Absolvent",
        StudentStatus::Unknown => "Necunoscut",
    }
}

/// Badge color name for a status.
#[must_use]
pub fn status_color(status: StudentStatus) -> &'static str {
    match status {
        StudentStatus::Active => "green",
        StudentStatus::Inactive => "yellow",
        StudentStatus::Graduated => "blue",
        StudentStatus::Unknown => "gray",
    }
}

#[must_use]
pub fn gpa_label(gpa: f64) -> &'static str {
    if gpa >= 9.0 {
        "Excelent"
    } else if gpa >= 8.0 {
        "Foarte bine"
    } else {
        "Bine"
    }
}

#[must_use]
pub fn gpa_color(gpa: f64) -> &'static str {
    if gpa >= 9.0 {
        "green"
    } else if gpa >= 8.0 {
        "blue"
    } else {
        "orange"
    }
}

/// `YYYY-MM-DD` as a long Romanian date, e.g. `"15 martie 2003"`.
///
/// Anything that is not a valid calendar date is returned unchanged.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_or_else(
        |_| iso.to_string(),
        |date| format!("{} {} {}", date.day(), MONTHS_RO[date.month0() as usize], date.year()),
    )
}

/// Stable avatar background for a name.
#[must_use]
pub fn avatar_color(first_name: &str, last_name: &str) -> &'static str {
    let code = |s: &str| s.encode_utf16().next().map_or(0, usize::from);
    AVATAR_COLORS[(code(first_name) + code(last_name)) % AVATAR_COLORS.len()]
}
