use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Group size options offered by the trip request form. Each option covers a
/// headcount range and bills at one representative count, so a `"3-4"` party
/// is quoted for three travelers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GroupSize {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Pair,
    #[serde(rename = "3-4")]
    Small,
    #[serde(rename = "5-6")]
    Medium,
    #[serde(rename = "7+")]
    Large,
}

impl GroupSize {
    /// Every option, in the order the form presents them.
    pub const ALL: [GroupSize; 5] = [
        GroupSize::Solo,
        GroupSize::Pair,
        GroupSize::Small,
        GroupSize::Medium,
        GroupSize::Large,
    ];

    /// Parse a form token. Tokens outside the offered set are rejected here,
    /// at the boundary, so nothing downstream has to deal with them.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(GroupSize::Solo),
            "2" => Some(GroupSize::Pair),
            "3-4" => Some(GroupSize::Small),
            "5-6" => Some(GroupSize::Medium),
            "7+" => Some(GroupSize::Large),
            _ => None,
        }
    }

    /// The token used on the wire and in stored records.
    pub fn token(&self) -> &'static str {
        match self {
            GroupSize::Solo => "1",
            GroupSize::Pair => "2",
            GroupSize::Small => "3-4",
            GroupSize::Medium => "5-6",
            GroupSize::Large => "7+",
        }
    }

    /// Headcount the option bills as: the lower bound of its range, with the
    /// `+` of the open-ended option stripped. Not an exact party size.
    pub fn billable_count(&self) -> u32 {
        match self {
            GroupSize::Solo => 1,
            GroupSize::Pair => 2,
            GroupSize::Small => 3,
            GroupSize::Medium => 5,
            GroupSize::Large => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupSize::Solo => "Solo traveler",
            GroupSize::Pair => "2 travelers",
            GroupSize::Small => "3-4 travelers",
            GroupSize::Medium => "5-6 travelers",
            GroupSize::Large => "7+ travelers",
        }
    }
}

/// A validated trip request, ready to hand to the booking store. The store
/// assigns the id and the review status; this record is what the traveler
/// asked for and the price they were quoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub tour_id: String,
    pub traveler_name: String,
    pub traveler_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traveler_phone: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub group_size: GroupSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_id: Option<String>,
    pub estimated_price: f32,
}

impl BookingRequest {
    pub fn guide_selected(&self) -> bool {
        self.guide_id.is_some()
    }
}

/// Acknowledgement from the booking store: the stored request's reference
/// and the status it entered review with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub reference: String,
    pub status: BookingStatus,
}

/// Review states a stored request moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pending" => Some(BookingStatus::Pending),
            "approved" => Some(BookingStatus::Approved),
            "rejected" => Some(BookingStatus::Rejected),
            _ => None,
        }
    }

    pub fn props(&self) -> StatusProps {
        match self {
            BookingStatus::Pending => StatusProps {
                color: "amber",
                icon: "clock",
                label: "Pending",
            },
            BookingStatus::Approved => StatusProps {
                color: "green",
                icon: "check-circle",
                label: "Approved",
            },
            BookingStatus::Rejected => StatusProps {
                color: "red",
                icon: "x-circle",
                label: "Rejected",
            },
        }
    }
}

/// Display tuple for a request status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusProps {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Badge props for a stored status token. Tokens outside the known set get a
/// generic "Unknown" badge instead of failing, since stored records outlive
/// any one version of the status set.
pub fn status_props(status: &str) -> StatusProps {
    match BookingStatus::from_token(status) {
        Some(status) => status.props(),
        None => StatusProps {
            color: "gray",
            icon: "help-circle",
            label: "Unknown",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_size_tokens_round_trip() {
        for option in GroupSize::ALL {
            assert_eq!(GroupSize::from_token(option.token()), Some(option));
        }
    }

    #[test]
    fn group_size_bills_at_range_lower_bound() {
        assert_eq!(GroupSize::from_token("3-4"), Some(GroupSize::Small));
        assert_eq!(GroupSize::Small.billable_count(), 3);
        assert_eq!(GroupSize::Large.billable_count(), 7);
        assert_eq!(GroupSize::Pair.billable_count(), 2);
    }

    #[test]
    fn unrecognized_group_tokens_are_rejected() {
        assert_eq!(GroupSize::from_token(""), None);
        assert_eq!(GroupSize::from_token("8"), None);
        assert_eq!(GroupSize::from_token("a lot"), None);
    }

    #[test]
    fn labels_cover_every_offered_option() {
        for option in GroupSize::ALL {
            assert!(!option.label().is_empty());
        }
        assert_eq!(GroupSize::Solo.label(), "Solo traveler");
        assert_eq!(GroupSize::Small.label(), "3-4 travelers");
        assert_eq!(GroupSize::Large.label(), "7+ travelers");
    }

    #[test]
    fn status_props_cover_the_known_set() {
        assert_eq!(status_props("pending").label, "Pending");
        assert_eq!(status_props("approved").color, "green");
        assert_eq!(status_props("rejected").icon, "x-circle");
    }

    #[test]
    fn unknown_status_gets_the_generic_badge() {
        let props = status_props("archived");
        assert_eq!(props.label, "Unknown");
        assert_eq!(props.color, "gray");
    }
}
