use chrono::{Duration, NaiveDate};

use wanderwise_booking::models::tour::TourSummary;
use wanderwise_booking::services::pricing_service::PricingConfig;
use wanderwise_booking::services::validation_service::BookingFormData;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed "today" so window math is reproducible across runs.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn test_config() -> PricingConfig {
    PricingConfig::default()
}

pub fn sample_tour() -> TourSummary {
    TourSummary {
        id: "tour-glacier-loop".to_string(),
        title: "Glacier Loop Expedition".to_string(),
        duration: "7 days".to_string(),
    }
}

/// A form that passes every check against `fixed_today` and `test_config`.
pub fn valid_form() -> BookingFormData {
    let start = fixed_today() + Duration::days(10);
    BookingFormData {
        traveler_name: "Asha Verma".to_string(),
        traveler_email: "asha.verma@example.com".to_string(),
        traveler_phone: "+1 555 0100".to_string(),
        start_date: Some(start),
        end_date: Some(start + Duration::days(6)),
        group_size: "3-4".to_string(),
        additional_requests: String::new(),
        guide_id: None,
    }
}
