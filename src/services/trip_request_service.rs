use chrono::{Duration, NaiveDate};
use log::{info, warn};
use thiserror::Error;

use crate::models::booking::{BookingConfirmation, BookingRequest, GroupSize};
use crate::models::tour::TourSummary;
use crate::services::pricing_service::{PriceBreakdown, PricingConfig, PricingService};
use crate::services::store::interface::{BookingStore, SubmissionError};
use crate::services::validation_service::{BookingFormData, BookingValidator, ValidationResult};

/// Where a trip request currently sits in its submission lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// Fields are being edited; nothing in flight.
    Editing,
    /// A submit is running its final form check.
    Validating,
    /// The request has been handed to the store; awaiting its answer.
    Submitting,
    /// The store accepted the request. Terminal for this flow.
    Succeeded(BookingConfirmation),
    /// The store turned the request down or could not be reached.
    Failed(String),
}

/// Why a submit attempt produced no confirmation.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("booking form is invalid: {0}")]
    Validation(ValidationResult),
    #[error(transparent)]
    Store(#[from] SubmissionError),
}

/// Collects trip parameters for one tour, keeps the derived display values
/// current while the traveler edits, and drives the submission hand-off to
/// the booking store.
pub struct TripRequestBuilder<S: BookingStore> {
    tour: TourSummary,
    config: PricingConfig,
    today: NaiveDate,
    store: S,
    form: BookingFormData,
    price_estimate: Option<f32>,
    last_validation: Option<ValidationResult>,
    state: SubmissionState,
}

impl<S: BookingStore> TripRequestBuilder<S> {
    /// `today` is captured once so every date decision this builder makes is
    /// reproducible; hosts pass `Utc::now().date_naive()`.
    pub fn new(tour: TourSummary, config: PricingConfig, today: NaiveDate, store: S) -> Self {
        Self {
            tour,
            config,
            today,
            store,
            form: BookingFormData::default(),
            price_estimate: None,
            last_validation: None,
            state: SubmissionState::Editing,
        }
    }

    pub fn tour(&self) -> &TourSummary {
        &self.tour
    }

    pub fn form(&self) -> &BookingFormData {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Errors from the most recent submit attempt, kept around so the form
    /// can keep rendering them between edits.
    pub fn last_validation(&self) -> Option<&ValidationResult> {
        self.last_validation.as_ref()
    }

    /// Running quote for the current selections. Absent until a recognized
    /// group size has been chosen; there is no number to show before that.
    pub fn price_estimate(&self) -> Option<f32> {
        self.price_estimate
    }

    /// Cost decomposition for the current selections, for the host's cost
    /// panel. Same availability rule as `price_estimate`.
    pub fn price_breakdown(&self) -> Option<PriceBreakdown> {
        GroupSize::from_token(&self.form.group_size).map(|group_size| {
            PricingService::price_breakdown(
                &self.tour.duration,
                group_size,
                self.form.guide_id.is_some(),
                &self.config,
            )
        })
    }

    /// Inclusive start-date bounds for this builder's date picker.
    pub fn booking_window(&self) -> (NaiveDate, NaiveDate) {
        BookingValidator::booking_window(self.today, &self.config)
    }

    pub fn set_traveler_name(&mut self, name: &str) {
        self.resume_editing();
        self.form.traveler_name = name.to_string();
        self.refresh_estimate();
    }

    pub fn set_traveler_email(&mut self, email: &str) {
        self.resume_editing();
        self.form.traveler_email = email.to_string();
        self.refresh_estimate();
    }

    pub fn set_traveler_phone(&mut self, phone: &str) {
        self.resume_editing();
        self.form.traveler_phone = phone.to_string();
        self.refresh_estimate();
    }

    /// Setting the start date also proposes an end date from the tour's
    /// advertised duration: a "7 days" tour starting Monday suggests the
    /// following Sunday. The traveler can still override it.
    pub fn set_start_date(&mut self, start: NaiveDate) {
        self.resume_editing();
        self.form.start_date = Some(start);
        let days = PricingService::parse_duration_days(&self.tour.duration);
        // Catalog durations long enough to run off the calendar suggest
        // nothing better than the start date itself.
        let suggested = start
            .checked_add_signed(Duration::days(days as i64 - 1))
            .unwrap_or(start);
        self.form.end_date = Some(suggested);
        self.refresh_estimate();
    }

    pub fn set_end_date(&mut self, end: NaiveDate) {
        self.resume_editing();
        self.form.end_date = Some(end);
        self.refresh_estimate();
    }

    /// Stores the raw token; recognition is checked at validation time and by
    /// the estimate refresh.
    pub fn set_group_size(&mut self, token: &str) {
        self.resume_editing();
        self.form.group_size = token.to_string();
        self.refresh_estimate();
    }

    pub fn set_additional_requests(&mut self, requests: &str) {
        self.resume_editing();
        self.form.additional_requests = requests.to_string();
        self.refresh_estimate();
    }

    /// Attach or clear the guide for this request. The guide fee shows up in
    /// the estimate immediately.
    pub fn select_guide(&mut self, guide_id: Option<&str>) {
        self.resume_editing();
        self.form.guide_id = guide_id.map(String::from);
        self.refresh_estimate();
    }

    /// Run the final form check and, if it passes, hand the request to the
    /// store. Validation reports every violation in one pass and returns the
    /// builder to `Editing`; a store failure lands in `Failed`, and the next
    /// edit reopens `Editing` for a retry.
    pub async fn submit(&mut self) -> Result<BookingConfirmation, SubmitError> {
        self.state = SubmissionState::Validating;

        let result =
            BookingValidator::validate_booking_form(&self.form, self.today, &self.config);
        self.last_validation = Some(result.clone());
        if !result.is_valid {
            self.state = SubmissionState::Editing;
            return Err(SubmitError::Validation(result));
        }

        let request = self
            .build_request()
            .expect("a form that just passed validation builds a request");

        self.state = SubmissionState::Submitting;
        info!(
            "submitting booking request for tour {} ({} travelers billed)",
            self.tour.id,
            request.group_size.billable_count()
        );

        match self.store.submit_booking(&request).await {
            Ok(confirmation) => {
                self.state = SubmissionState::Succeeded(confirmation.clone());
                Ok(confirmation)
            }
            Err(err) => {
                warn!(
                    "booking store refused request for tour {}: {}",
                    self.tour.id, err
                );
                self.state = SubmissionState::Failed(err.to_string());
                Err(SubmitError::Store(err))
            }
        }
    }

    fn build_request(&self) -> Option<BookingRequest> {
        let start_date = self.form.start_date?;
        let end_date = self.form.end_date?;
        let group_size = GroupSize::from_token(&self.form.group_size)?;

        let estimated_price = PricingService::calculate_price(
            &self.tour.duration,
            group_size,
            self.form.guide_id.is_some(),
            &self.config,
        );

        Some(BookingRequest {
            tour_id: self.tour.id.clone(),
            traveler_name: self.form.traveler_name.trim().to_string(),
            traveler_email: self.form.traveler_email.trim().to_string(),
            traveler_phone: optional(&self.form.traveler_phone),
            start_date,
            end_date,
            group_size,
            additional_requests: optional(&self.form.additional_requests),
            guide_id: self.form.guide_id.clone(),
            estimated_price,
        })
    }

    fn refresh_estimate(&mut self) {
        self.price_estimate = GroupSize::from_token(&self.form.group_size).map(|group_size| {
            PricingService::calculate_price(
                &self.tour.duration,
                group_size,
                self.form.guide_id.is_some(),
                &self.config,
            )
        });
    }

    fn resume_editing(&mut self) {
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Editing;
        }
    }
}

fn optional(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
