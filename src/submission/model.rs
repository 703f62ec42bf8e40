use chrono::{DateTime, NaiveDate, Utc};
use hostel_types::{Priority, SubmissionKind, SubmissionStatus, TimeSlot};
use serde::Serialize;
use uuid::Uuid;

/// Fields that exist only for one submission kind. Keeping them in a tagged
/// union means a cleaning request cannot carry a priority, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmissionDetails {
    Complaint {
        category: String,
        priority: Priority,
    },
    Query {
        category: String,
    },
    Cleaning {
        #[serde(skip_serializing_if = "Option::is_none")]
        preferred_date: Option<NaiveDate>,
        preferred_time: TimeSlot,
    },
}

impl SubmissionDetails {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::Complaint { .. } => SubmissionKind::Complaint,
            Self::Query { .. } => SubmissionKind::Query,
            Self::Cleaning { .. } => SubmissionKind::Cleaning,
        }
    }
}

/// A student-filed record. Only `status` changes after creation, and only
/// through `SubmissionStore::update_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub(super) id: Uuid,
    pub(super) title: String,
    pub(super) description: String,
    #[serde(flatten)]
    pub(super) details: SubmissionDetails,
    pub(super) student_id: String,
    pub(super) room_number: String,
    pub(super) timestamp: DateTime<Utc>,
    pub(super) status: SubmissionStatus,
}

impl Submission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> SubmissionKind {
        self.details.kind()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &SubmissionDetails {
        &self.details
    }

    pub fn category(&self) -> Option<&str> {
        match &self.details {
            SubmissionDetails::Complaint { category, .. } | SubmissionDetails::Query { category } => {
                Some(category)
            }
            SubmissionDetails::Cleaning { .. } => None,
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        match self.details {
            SubmissionDetails::Complaint { priority, .. } => Some(priority),
            _ => None,
        }
    }

    pub fn preferred_date(&self) -> Option<NaiveDate> {
        match self.details {
            SubmissionDetails::Cleaning { preferred_date, .. } => preferred_date,
            _ => None,
        }
    }

    pub fn preferred_time(&self) -> Option<TimeSlot> {
        match self.details {
            SubmissionDetails::Cleaning { preferred_time, .. } => Some(preferred_time),
            _ => None,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }
}
