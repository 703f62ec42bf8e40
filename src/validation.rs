use chrono::NaiveDate;

use crate::error::PortalError;

pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), PortalError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(PortalError::Validation(format!(
            "{field} must be between {min} and {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// A required text field: non-blank after trimming and within `max` characters.
pub fn check_required(field: &str, value: &str, max: usize) -> Result<(), PortalError> {
    if value.trim().is_empty() {
        return Err(PortalError::Validation(format!("{field} is required")));
    }
    check_length(field, value, 1, max)
}

pub fn check_email(value: &str) -> Result<(), PortalError> {
    check_length("email", value, 3, 254)?;
    if !value.contains('@') {
        return Err(PortalError::Validation("invalid email address".into()));
    }
    Ok(())
}

pub fn check_phone(value: &str) -> Result<(), PortalError> {
    check_length("phone", value, 7, 20)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(PortalError::Validation(
            "phone must contain only digits, spaces, '+', '-', or parentheses".into(),
        ));
    }
    Ok(())
}

/// Cleaning visits need at least one day of notice.
pub fn check_preferred_date(date: NaiveDate, today: NaiveDate) -> Result<(), PortalError> {
    if date <= today {
        return Err(PortalError::Validation(format!(
            "preferred_date must be after {today} (24-hour advance notice required)"
        )));
    }
    Ok(())
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, PortalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PortalError::Validation(format!("{field} must be a date as YYYY-MM-DD")))
}
