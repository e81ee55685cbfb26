use std::fmt;

use chrono::{Duration, NaiveDate};
use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::models::booking::GroupSize;
use crate::services::pricing_service::PricingConfig;

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 255;
const MAX_PHONE_CHARS: usize = 20;
const MAX_REQUESTS_CHARS: usize = 1000;

/// Raw form state as the traveler typed it. Text fields use the empty string
/// for "not filled in"; dates are absent until picked.
#[derive(Debug, Clone, Default)]
pub struct BookingFormData {
    pub traveler_name: String,
    pub traveler_email: String,
    pub traveler_phone: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub group_size: String,
    pub additional_requests: String,
    pub guide_id: Option<String>,
}

/// Outcome of a whole-form check. Every violated rule contributes one
/// message, in the order the form lays the fields out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "valid")
        } else {
            write!(f, "{}", self.errors.join("; "))
        }
    }
}

pub struct BookingValidator;

impl BookingValidator {
    /// Inclusive range of start dates currently accepted, relative to the
    /// caller's "today". Hosts use this for date-picker bounds.
    pub fn booking_window(today: NaiveDate, config: &PricingConfig) -> (NaiveDate, NaiveDate) {
        (
            saturating_offset(today, config.min_advance_days),
            saturating_offset(today, config.max_advance_days),
        )
    }

    /// A start date is bookable when it falls inside the advance window,
    /// both ends included.
    pub fn is_valid_booking_date(date: NaiveDate, today: NaiveDate, config: &PricingConfig) -> bool {
        let (min_date, max_date) = Self::booking_window(today, config);
        date >= min_date && date <= max_date
    }

    pub fn is_valid_email(email: &str) -> bool {
        let re = Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)+$",
        );
        re.unwrap().is_match(email)
    }

    /// Check the whole form and report every violation at once. Checks never
    /// short-circuit: a form with three problems produces three messages, in
    /// field order. Text fields are judged on their trimmed values, the same
    /// values a stored request carries.
    pub fn validate_booking_form(
        form: &BookingFormData,
        today: NaiveDate,
        config: &PricingConfig,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        let name = form.traveler_name.trim();
        if name.is_empty() {
            errors.push("Name is required".to_string());
        } else if name.chars().count() > MAX_NAME_CHARS {
            errors.push(format!("Name must be {} characters or less", MAX_NAME_CHARS));
        }

        let email = form.traveler_email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !Self::is_valid_email(email) {
            errors.push("Please enter a valid email address".to_string());
        } else if email.chars().count() > MAX_EMAIL_CHARS {
            errors.push(format!("Email must be {} characters or less", MAX_EMAIL_CHARS));
        }

        let phone = form.traveler_phone.trim();
        if !phone.is_empty() && phone.chars().count() > MAX_PHONE_CHARS {
            errors.push(format!(
                "Phone number must be {} characters or less",
                MAX_PHONE_CHARS
            ));
        }

        match form.start_date {
            None => errors.push("Start date is required".to_string()),
            Some(start) => {
                if !Self::is_valid_booking_date(start, today, config) {
                    errors.push(format!(
                        "Start date must be at least {} days from today",
                        config.min_advance_days
                    ));
                }
            }
        }

        match form.end_date {
            None => errors.push("End date is required".to_string()),
            Some(end) => {
                // Comparable only once a start date exists; a missing start
                // already reported its own error above.
                if let Some(start) = form.start_date {
                    if end <= start {
                        errors.push("End date must be after start date".to_string());
                    }
                }
            }
        }

        if form.group_size.is_empty() {
            errors.push("Group size is required".to_string());
        } else if GroupSize::from_token(&form.group_size).is_none() {
            errors.push("Please select a valid group size".to_string());
        }

        if form.additional_requests.trim().chars().count() > MAX_REQUESTS_CHARS {
            errors.push(format!(
                "Special requests must be {} characters or less",
                MAX_REQUESTS_CHARS
            ));
        }

        let result = ValidationResult::from_errors(errors);
        if !result.is_valid {
            debug!(
                "booking form failed validation with {} error(s)",
                result.errors.len()
            );
        }
        result
    }
}

/// `today` offset by `days`, pinned to the calendar edge when the offset
/// leaves the range a `NaiveDate` can represent.
fn saturating_offset(today: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}
