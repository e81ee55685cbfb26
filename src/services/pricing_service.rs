use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::booking::GroupSize;

const BASE_RATE_PER_DAY: f32 = 150.0;
const GUIDE_FEE_PER_DAY: f32 = 75.0;
const DEFAULT_TRIP_DAYS: u32 = 5;
const MIN_ADVANCE_DAYS: i64 = 3;
const MAX_ADVANCE_DAYS: i64 = 365;
const MIN_PARTICIPANTS: u32 = 1;
const MAX_PARTICIPANTS: u32 = 12;
const MIN_TRIP_DAYS: u32 = 1;
const MAX_TRIP_DAYS: u32 = 30;

/// Pricing and booking-window constants. Fixed for the lifetime of the
/// process: the host loads one value at startup and passes it into every call
/// that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Per-day, per-traveler base rate.
    pub base_rate_per_day: f32,
    /// Per-day surcharge when a guide is attached to the request.
    pub guide_fee_per_day: f32,
    pub currency_symbol: String,
    pub currency_code: String,
    /// Earliest bookable start date, in days from today (inclusive).
    pub min_advance_days: i64,
    /// Latest bookable start date, in days from today (inclusive).
    pub max_advance_days: i64,
    pub min_participants: u32,
    pub max_participants: u32,
    pub min_trip_days: u32,
    pub max_trip_days: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_rate_per_day: BASE_RATE_PER_DAY,
            guide_fee_per_day: GUIDE_FEE_PER_DAY,
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            min_advance_days: MIN_ADVANCE_DAYS,
            max_advance_days: MAX_ADVANCE_DAYS,
            min_participants: MIN_PARTICIPANTS,
            max_participants: MAX_PARTICIPANTS,
            min_trip_days: MIN_TRIP_DAYS,
            max_trip_days: MAX_TRIP_DAYS,
        }
    }
}

impl PricingConfig {
    /// Load the config with environment overrides for the deployable knobs,
    /// falling back to the compiled defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            base_rate_per_day: std::env::var("BOOKING_BASE_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.base_rate_per_day),
            guide_fee_per_day: std::env::var("BOOKING_GUIDE_FEE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.guide_fee_per_day),
            min_advance_days: std::env::var("BOOKING_MIN_ADVANCE_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_advance_days),
            max_advance_days: std::env::var("BOOKING_MAX_ADVANCE_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_advance_days),
            ..defaults
        };

        debug!("pricing config loaded: {:?}", config);
        config
    }
}

/// One quote, decomposed the way the cost panel shows it. `total` is always
/// `base_total + guide_total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub days: u32,
    pub travelers: u32,
    pub base_total: f32,
    pub guide_total: f32,
    pub total: f32,
}

pub struct PricingService;

impl PricingService {
    /// Best-effort day count from a catalog duration string. Takes the first
    /// digit run anywhere in the text, so "7 days" and "10-day journey" both
    /// parse; text without digits falls back to a five-day trip.
    pub fn parse_duration_days(duration: &str) -> u32 {
        let re = Regex::new(r"\d+").unwrap();
        re.find(duration)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_TRIP_DAYS)
    }

    /// Quote a trip with the full cost decomposition.
    pub fn price_breakdown(
        duration: &str,
        group_size: GroupSize,
        has_guide: bool,
        config: &PricingConfig,
    ) -> PriceBreakdown {
        let days = Self::parse_duration_days(duration);
        let travelers = group_size.billable_count();

        let base_total = config.base_rate_per_day * days as f32 * travelers as f32;
        let guide_total = if has_guide {
            config.guide_fee_per_day * days as f32
        } else {
            0.0
        };

        PriceBreakdown {
            days,
            travelers,
            base_total,
            guide_total,
            total: base_total + guide_total,
        }
    }

    /// Quote a trip: base rate by day and billable headcount, plus the
    /// per-day guide surcharge when a guide is attached. Unrounded; display
    /// formatting is `format_price`'s job.
    pub fn calculate_price(
        duration: &str,
        group_size: GroupSize,
        has_guide: bool,
        config: &PricingConfig,
    ) -> f32 {
        Self::price_breakdown(duration, group_size, has_guide, config).total
    }

    /// Render an amount the way the storefront shows prices: currency symbol,
    /// thousands separators, no decimals. Rounds half away from zero.
    pub fn format_price(amount: f32, config: &PricingConfig) -> String {
        let rounded = amount.round() as i64;
        let digits = rounded.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if rounded < 0 {
            format!("-{}{}", config.currency_symbol, grouped)
        } else {
            format!("{}{}", config.currency_symbol, grouped)
        }
    }
}
