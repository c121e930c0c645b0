//! Input validation for usernames and dates of birth

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Wire format of a date of birth
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid regex"));

// `\d` would also match non-ASCII digits
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

/// Check that a username is non-empty and made of Latin letters only.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        tracing::info!("username validation failed: username is empty");
        return Err(Error::InvalidUsername("username can't be empty".to_string()));
    }

    if !USERNAME_RE.is_match(username) {
        tracing::info!(%username, "username validation failed: wrong format");
        return Err(Error::InvalidUsername(format!(
            "username '{}' is in a wrong format",
            username
        )));
    }

    tracing::debug!(%username, "username validated");
    Ok(())
}

/// Parse and check a raw `YYYY-MM-DD` date of birth against the current UTC instant.
pub fn validate_date_of_birth(raw: &str) -> Result<NaiveDate> {
    validate_date_of_birth_at(raw, Utc::now())
}

/// Parse and check a raw `YYYY-MM-DD` date of birth against `now`.
///
/// The date must be a real calendar date whose midnight (UTC) lies strictly
/// before `now - 24h`, so today and any future date are rejected.
pub fn validate_date_of_birth_at(raw: &str, now: DateTime<Utc>) -> Result<NaiveDate> {
    let wrong_format = || Error::InvalidDateOfBirth(format!("{} is in a wrong format", raw));

    if !DATE_RE.is_match(raw) {
        tracing::info!(date_of_birth = %raw, "date of birth failed pattern check");
        return Err(wrong_format());
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|err| {
        tracing::info!(date_of_birth = %raw, error = %err, "date of birth is not a calendar date");
        wrong_format()
    })?;

    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    if midnight >= now - Duration::hours(24) {
        tracing::info!(date_of_birth = %raw, "date of birth is not in the past");
        return Err(Error::InvalidDateOfBirth(format!(
            "{} must be a date before today",
            raw
        )));
    }

    tracing::debug!(date_of_birth = %raw, "date of birth validated");
    Ok(date)
}
