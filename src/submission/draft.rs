use chrono::NaiveDate;
use hostel_types::{Priority, SubmissionKind, TimeSlot};

/// What a student filled in on one of the three forms, before the lifecycle
/// policy validates it and the store stamps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDraft {
    Complaint {
        title: String,
        description: String,
        category: String,
        priority: Option<Priority>,
    },
    Query {
        title: String,
        description: String,
        category: String,
    },
    Cleaning {
        title: Option<String>,
        description: Option<String>,
        preferred_date: Option<NaiveDate>,
        preferred_time: Option<TimeSlot>,
    },
}

impl SubmissionDraft {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::Complaint { .. } => SubmissionKind::Complaint,
            Self::Query { .. } => SubmissionKind::Query,
            Self::Cleaning { .. } => SubmissionKind::Cleaning,
        }
    }
}
