// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::macros::format_description;
use time::{Date, Time};

pub const DATE_LAYOUT: &str = "YYYY-MM-DD";
pub const TIME_LAYOUT: &str = "HH:MM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidDate,
    InvalidTime,
    InvalidRating,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate => f.write_str("invalid date value"),
            Self::InvalidTime => f.write_str("invalid time value"),
            Self::InvalidRating => f.write_str("invalid rating value"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

pub fn parse_required_date(input: &str) -> ValidationResult<Date> {
    Date::parse(input.trim(), &format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDate)
}

pub fn parse_optional_date(input: &str) -> ValidationResult<Option<Date>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_required_date(trimmed).map(Some)
}

pub fn format_date(value: Date) -> String {
    value
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "1970-01-01".to_owned())
}

/// Abbreviated display form, e.g. "Aug 31, 2025".
pub fn format_display_date(value: Date) -> String {
    value
        .format(&format_description!("[month repr:short] [day], [year]"))
        .unwrap_or_else(|_| format_date(value))
}

pub fn parse_required_time(input: &str) -> ValidationResult<Time> {
    Time::parse(input.trim(), &format_description!("[hour]:[minute]"))
        .map_err(|_| ValidationError::InvalidTime)
}

/// 24-hour clock form, e.g. "09:00".
pub fn format_time(value: Time) -> String {
    value
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "00:00".to_owned())
}

pub fn parse_rating(input: &str) -> ValidationResult<f64> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidRating)?;
    if !(0.0..=5.0).contains(&value) {
        return Err(ValidationError::InvalidRating);
    }
    Ok(value)
}

pub fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::{
        ValidationError, format_date, format_display_date, format_rating, format_time,
        parse_optional_date, parse_rating, parse_required_date, parse_required_time,
    };
    use time::macros::{date, time};

    #[test]
    fn dates_round_trip_in_storage_layout() {
        let parsed = parse_required_date("2025-08-31").expect("valid date");
        assert_eq!(parsed, date!(2025 - 08 - 31));
        assert_eq!(format_date(parsed), "2025-08-31");
    }

    #[test]
    fn display_date_is_abbreviated() {
        assert_eq!(format_display_date(date!(2025 - 08 - 31)), "Aug 31, 2025");
    }

    #[test]
    fn optional_date_accepts_blank() {
        assert_eq!(parse_optional_date("  "), Ok(None));
        assert_eq!(
            parse_optional_date("2025-08-31"),
            Ok(Some(date!(2025 - 08 - 31)))
        );
        assert_eq!(
            parse_optional_date("08/31/2025"),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn times_round_trip_in_storage_layout() {
        let parsed = parse_required_time("09:30").expect("valid time");
        assert_eq!(parsed, time!(9:30));
        assert_eq!(format_time(parsed), "09:30");
        assert!(parse_required_time("9.30").is_err());
    }

    #[test]
    fn ratings_are_bounded() {
        assert_eq!(parse_rating("4.5"), Ok(4.5));
        assert_eq!(parse_rating("0"), Ok(0.0));
        assert_eq!(parse_rating("5.1"), Err(ValidationError::InvalidRating));
        assert_eq!(parse_rating("four"), Err(ValidationError::InvalidRating));
        assert_eq!(format_rating(4.5), "4.5");
    }
}
