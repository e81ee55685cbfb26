use serde::{Deserialize, Serialize};

/// The slice of a tour listing the booking engine reads. The catalog stores
/// duration as display text ("7 days", "10-day journey"), so day counts are
/// extracted from it on demand rather than kept as a structured field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSummary {
    pub id: String,
    pub title: String,
    pub duration: String,
}
