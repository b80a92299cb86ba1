//! Identity field checks: email, password, phone number and age.
//!
//! Everything here is pure. The only non-determinism is [`is_age_valid`],
//! which reads the local calendar date at call time.

use crate::error::{CheckError, CheckResult};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use email_address::{EmailAddress, Options};
use lazy_static::lazy_static;
use regex::Regex;

/// Minimum password length in bytes
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum age in whole years
pub const MINIMUM_AGE: u32 = 18;

/// Date layouts accepted for a date of birth, tried in order
const BIRTH_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];

lazy_static! {
    /// `+`, 1-3 digit country code, optional single space, 4-14 digit subscriber number
    static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\+[0-9]{1,3} ?[0-9]{4,14}$").unwrap();
}

/// Validates email format according to RFC 5322
///
/// The domain must have at least two labels (`example.com`), and display-name
/// forms such as `Jane <jane@example.com>` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    let options = Options::default()
        .with_minimum_sub_domains(2)
        .without_display_text();
    EmailAddress::parse_with_options(email, options).is_ok()
}

/// Checks the password is at least [`MIN_PASSWORD_LENGTH`] bytes long
pub fn is_valid_password(password: &str) -> bool {
    has_min_length(password, MIN_PASSWORD_LENGTH)
}

pub(crate) fn has_min_length(password: &str, min_length: usize) -> bool {
    password.len() >= min_length
}

/// Checks an international phone number such as `+1234567890123` or `+44 7911123456`
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(phone_number)
}

/// Checks the person born on `date_of_birth` is at least [`MINIMUM_AGE`] today
pub fn is_age_valid(date_of_birth: &str) -> CheckResult<bool> {
    is_age_valid_on(date_of_birth, Local::now().date_naive())
}

/// Same as [`is_age_valid`] with an explicit reference date
pub fn is_age_valid_on(date_of_birth: &str, today: NaiveDate) -> CheckResult<bool> {
    is_at_least_on(date_of_birth, MINIMUM_AGE, today)
}

pub(crate) fn is_at_least_on(date_of_birth: &str, minimum_age: u32, today: NaiveDate) -> CheckResult<bool> {
    let birth = parse_birth_date(date_of_birth)?;
    Ok(age_on(birth, today).is_some_and(|age| age >= minimum_age))
}

/// Whole years between `birth` and `today`, `None` when `birth` is in the future
///
/// A February 29 birthday is reached on March 1 in non-leap years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    u32::try_from(years).ok()
}

/// Parses a date of birth in one of the accepted layouts or as an RFC 3339 timestamp
pub fn parse_birth_date(text: &str) -> CheckResult<NaiveDate> {
    let trimmed = text.trim();

    for format in BIRTH_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| CheckError::Parse(format!("Invalid date of birth: {:?}", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("Jane <jane@example.com>"));
    }

    #[test]
    fn test_password_length() {
        assert!(is_valid_password("password123"));
        assert!(is_valid_password("12345678"));
        assert!(!is_valid_password("1234567"));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_phone_number_validation() {
        assert!(is_valid_phone_number("+1234567890123"));
        assert!(is_valid_phone_number("+44 7911123456"));
        assert!(is_valid_phone_number("+1 5550"));

        // Missing country code prefix
        assert!(!is_valid_phone_number("1234567890"));
        // Country code 12, one space, 11 digits: accepted by the pattern
        assert!(is_valid_phone_number("+12 34567890123"));
        // Two spaces
        assert!(!is_valid_phone_number("+12  34567890123"));
        // Other separators
        assert!(!is_valid_phone_number("+1-555-0100"));
        assert!(!is_valid_phone_number("+1 (555) 0100"));
        // Subscriber part too short / too long
        assert!(!is_valid_phone_number("+1 555"));
        assert!(!is_valid_phone_number("+1 123456789012345"));
        // Trailing newline is not accepted
        assert!(!is_valid_phone_number("+1234567890123\n"));
        assert!(!is_valid_phone_number("+1234 5678"));
    }

    #[test]
    fn test_age_with_fixed_today() {
        let today = date(2024, 6, 1);
        assert!(is_age_valid_on("2000-01-01", today).unwrap());
        assert!(!is_age_valid_on("2010-01-01", today).unwrap());
    }

    #[test]
    fn test_age_boundary() {
        let today = date(2024, 6, 1);
        // Exactly 18 years
        assert!(is_age_valid_on("2006-06-01", today).unwrap());
        // 17 years and 364 days
        assert!(!is_age_valid_on("2006-06-02", today).unwrap());
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let birth = date(2004, 2, 29);
        assert_eq!(age_on(birth, date(2022, 2, 28)), Some(17));
        assert_eq!(age_on(birth, date(2022, 3, 1)), Some(18));
        assert_eq!(age_on(birth, date(2024, 2, 29)), Some(20));
    }

    #[test]
    fn test_future_birth_date_is_not_an_age() {
        let today = date(2024, 6, 1);
        assert_eq!(age_on(date(2050, 1, 1), today), None);
        assert!(!is_age_valid_on("2050-01-01", today).unwrap());
    }

    #[test]
    fn test_birth_date_formats() {
        let expected = date(2000, 1, 31);
        assert_eq!(parse_birth_date("2000-01-31").unwrap(), expected);
        assert_eq!(parse_birth_date(" 2000/01/31 ").unwrap(), expected);
        assert_eq!(parse_birth_date("01/31/2000").unwrap(), expected);
        assert_eq!(parse_birth_date("31-01-2000").unwrap(), expected);
        assert_eq!(parse_birth_date("31.01.2000").unwrap(), expected);
        assert_eq!(parse_birth_date("2000-01-31T10:00:00+02:00").unwrap(), expected);
    }

    #[test]
    fn test_unparseable_date_is_parse_error() {
        assert!(matches!(is_age_valid("not a date"), Err(CheckError::Parse(_))));
        assert!(matches!(is_age_valid("2000-13-01"), Err(CheckError::Parse(_))));
        assert!(matches!(is_age_valid(""), Err(CheckError::Parse(_))));
    }

    #[test]
    fn test_age_against_today() {
        assert!(is_age_valid("1970-01-01").unwrap());
        let next_year = Local::now().date_naive().year() + 1;
        assert!(!is_age_valid(&format!("{}-01-01", next_year)).unwrap());
    }
}
