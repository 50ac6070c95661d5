use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// User-facing validation failures; the display text is what the form shows.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Name must be at least 3 characters")]
    NameTooShort,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Please enter a valid date")]
    InvalidDate,
    #[error("Please select a future date")]
    PastDate,
}

pub type FieldCheck = Result<(), FieldError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationReport {
    pub name: FieldCheck,
    pub phone: FieldCheck,
    /// `None` when no date was entered; the field is optional.
    pub date: Option<FieldCheck>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.name.is_ok() && self.phone.is_ok() && self.date.map_or(true, |date| date.is_ok())
    }
}

pub fn check_name(raw: &str) -> FieldCheck {
    let name = raw.trim();
    if name.is_empty() {
        Err(FieldError::MissingName)
    } else if name.chars().count() < 3 {
        Err(FieldError::NameTooShort)
    } else {
        Ok(())
    }
}

pub fn check_phone(raw: &str) -> FieldCheck {
    let phone = raw.trim();
    if phone.is_empty() {
        Err(FieldError::MissingPhone)
    } else if !PHONE_PATTERN.is_match(phone) {
        Err(FieldError::InvalidPhone)
    } else {
        Ok(())
    }
}

/// Date inputs report `YYYY-MM-DD`. Today is still bookable.
pub fn check_date(raw: &str, today: NaiveDate) -> Option<FieldCheck> {
    if raw.is_empty() {
        return None;
    }
    let check = match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) if date < today => Err(FieldError::PastDate),
        Ok(_) => Ok(()),
        Err(_) => Err(FieldError::InvalidDate),
    };
    Some(check)
}

pub fn validate(draft: &AppointmentDraft, today: NaiveDate) -> ValidationReport {
    ValidationReport {
        name: check_name(&draft.name),
        phone: check_phone(&draft.phone),
        date: check_date(&draft.date, today),
    }
}
