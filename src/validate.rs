//! Input validation for the operation boundary.
//!
//! Both operations take a [`DateRange`]; the declared contract is the literal
//! `YYYY-MM-DD` shape. Calendar validity is deliberately not checked — the
//! upstream feed owns that, and rejecting e.g. month 99 here would change the
//! operations' observable behavior.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FeedError;
use crate::model::DateRange;

/// Literal `YYYY-MM-DD`: four digits, hyphen, two digits, hyphen, two digits.
/// Also advertised verbatim in the tool input schemas.
pub const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

static FEED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("feed date pattern"));

/// Returns `true` if `value` matches the feed date shape.
pub fn is_feed_date(value: &str) -> bool {
    FEED_DATE.is_match(value)
}

/// Validates both ends of `range`, naming the offending field on failure.
pub fn date_range(range: &DateRange) -> Result<(), FeedError> {
    for (field, value) in [
        ("startDate", range.start_date.as_str()),
        ("endDate", range.end_date.as_str()),
    ] {
        if !is_feed_date(value) {
            return Err(FeedError::Validation(format!(
                "{field} must match YYYY-MM-DD, got '{value}'"
            )));
        }
    }
    Ok(())
}
