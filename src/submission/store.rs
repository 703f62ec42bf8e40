use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use hostel_types::SubmissionStatus;
use uuid::Uuid;

use super::model::{Submission, SubmissionDetails};

/// Source of creation timestamps. The store never takes a timestamp from the caller.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Validated content of a submission that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub title: String,
    pub description: String,
    pub details: SubmissionDetails,
    pub student_id: String,
    pub room_number: String,
}

/// The session's submissions in insertion order. Nothing is ever removed.
pub struct SubmissionStore {
    items: Vec<Submission>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for SubmissionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionStore")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Assign id and timestamp, force `pending`, and append.
    pub(crate) fn append(&mut self, new: NewSubmission) -> &Submission {
        let mut id = Uuid::now_v7();
        while self.get(id).is_some() {
            id = Uuid::now_v7();
        }

        let submission = Submission {
            id,
            title: new.title,
            description: new.description,
            details: new.details,
            student_id: new.student_id,
            room_number: new.room_number,
            timestamp: self.clock.now(),
            status: SubmissionStatus::Pending,
        };
        self.items.push(submission);
        &self.items[self.items.len() - 1]
    }

    /// Set the status of one submission in place. Returns the previous status
    /// and the updated record, or `None` if the id is unknown.
    pub(crate) fn update_status(
        &mut self,
        id: Uuid,
        status: SubmissionStatus,
    ) -> Option<(SubmissionStatus, &Submission)> {
        let submission = self.items.iter_mut().find(|s| s.id == id)?;
        let previous = std::mem::replace(&mut submission.status, status);
        Some((previous, &*submission))
    }

    pub fn get(&self, id: Uuid) -> Option<&Submission> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn as_slice(&self) -> &[Submission] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
