use crate::submission::SubmissionKind;

pub const COMPLAINT_CATEGORIES: &[&str] = &[
    "Plumbing Issues",
    "Electrical Problems",
    "Heating/Cooling",
    "Furniture Damage",
    "Cleanliness",
    "Noise Complaints",
    "Security Concerns",
    "Internet/WiFi",
    "Other",
];

pub const QUERY_CATEGORIES: &[&str] = &[
    "Room Allocation",
    "Hostel Rules & Policies",
    "Meal Services",
    "Visitor Guidelines",
    "Maintenance Schedule",
    "Payment & Fees",
    "Facilities & Amenities",
    "Emergency Procedures",
    "Other",
];

/// Title stored on a cleaning request when the student leaves it blank.
pub const DEFAULT_CLEANING_TITLE: &str = "Room Cleaning Request";

/// Suggested categories offered to the student for a given kind.
/// Cleaning requests carry no category.
pub fn categories_for(kind: SubmissionKind) -> &'static [&'static str] {
    match kind {
        SubmissionKind::Complaint => COMPLAINT_CATEGORIES,
        SubmissionKind::Query => QUERY_CATEGORIES,
        SubmissionKind::Cleaning => &[],
    }
}
