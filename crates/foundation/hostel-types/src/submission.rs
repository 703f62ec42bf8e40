use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Where a submission sits in the triage flow.
///
/// Any status may follow any other; admins can reopen a resolved item or skip
/// `InProgress` entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    Pending,
    InProgress,
    Resolved,
}

impl SubmissionStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Triage rank: lower ranks are shown first in the admin view.
    pub fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Resolved => 2,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(PortalError::Validation(format!(
                "unknown status: {other} (expected pending, in-progress or resolved)"
            ))),
        }
    }
}

/// The kind of request a student files. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Complaint,
    Query,
    Cleaning,
}

impl SubmissionKind {
    pub const ALL: [Self; 3] = [Self::Complaint, Self::Query, Self::Cleaning];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Query => "query",
            Self::Cleaning => "cleaning",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complaint" => Ok(Self::Complaint),
            "query" => Ok(Self::Query),
            "cleaning" => Ok(Self::Cleaning),
            other => Err(PortalError::Validation(format!(
                "unknown submission type: {other} (expected complaint, query or cleaning)"
            ))),
        }
    }
}

/// Urgency a student attaches to a complaint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(PortalError::Validation(format!(
                "unknown priority: {other} (expected low, medium or high)"
            ))),
        }
    }
}

/// Cleaning crew shift a student can ask for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (8:00 AM - 12:00 PM)",
            Self::Afternoon => "Afternoon (12:00 PM - 4:00 PM)",
            Self::Evening => "Evening (4:00 PM - 8:00 PM)",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            other => Err(PortalError::Validation(format!(
                "unknown time slot: {other} (expected morning, afternoon or evening)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_every_variant() {
        for status in SubmissionStatus::ALL {
            let parsed: SubmissionStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_rank_orders_triage() {
        assert!(SubmissionStatus::Pending.rank() < SubmissionStatus::InProgress.rank());
        assert!(SubmissionStatus::InProgress.rank() < SubmissionStatus::Resolved.rank());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&SubmissionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn unknown_status_is_validation_error() {
        let err = "done".parse::<SubmissionStatus>().unwrap_err();
        assert!(matches!(err, PortalError::Validation(ref msg) if msg.contains("done")));
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert!("Pending".parse::<SubmissionStatus>().is_err());
        assert!("in_progress".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn unknown_kind_is_validation_error() {
        let err = "maintenance".parse::<SubmissionKind>().unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn unknown_priority_rejected() {
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn time_slot_labels() {
        assert_eq!(TimeSlot::Morning.label(), "Morning (8:00 AM - 12:00 PM)");
        assert_eq!("evening".parse::<TimeSlot>().unwrap(), TimeSlot::Evening);
    }

    #[test]
    fn display_matches_as_str() {
        for kind in SubmissionKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
        for status in SubmissionStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
