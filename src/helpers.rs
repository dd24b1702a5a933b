use chrono::NaiveDate;

use crate::consts::{EPSILON, LOCAL_API_URL, PRODUCTION_API_URL};

/// Selects which deployment of the statistics API to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    Production,
    Localhost,
}

impl ApiBase {
    pub fn get_url(&self) -> String {
        match self {
            ApiBase::Production => PRODUCTION_API_URL.to_string(),
            ApiBase::Localhost => LOCAL_API_URL.to_string(),
        }
    }
}

/// Ratio of `numerator` to `denominator`, or 0 when the denominator is zero.
///
/// Expenditure totals can legitimately be zero (no tenders in the period),
/// so a zero denominator means "no ratio" rather than an error.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() <= EPSILON {
        0.0
    } else {
        numerator / denominator
    }
}

/// Format a date the way the API's `from`/`to` query parameters expect it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Shorten a tender title for list display.
///
/// Titles longer than 50 characters are cut to their first 70 characters
/// with a trailing ellipsis; anything shorter passes through unchanged.
pub fn ellipsize_title(title: &str) -> String {
    if title.chars().count() > 50 {
        let head: String = title.chars().take(70).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}
