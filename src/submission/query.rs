use hostel_types::{Filter, SubmissionKind, SubmissionStatus};
use serde::Serialize;

use super::model::Submission;

/// Status, type and free-text predicates for a view. Dimensions combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub status: Filter<SubmissionStatus>,
    pub kind: Filter<SubmissionKind>,
    /// Case-insensitive substring over title, description, student id and room.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOrder {
    /// Pending first, then in-progress, then resolved; newest first within a tier.
    Triage,
    /// Store insertion order.
    AsSubmitted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn tally<'a>(submissions: impl IntoIterator<Item = &'a Submission>) -> Self {
        submissions
            .into_iter()
            .fold(Self::default(), |mut counts, s| {
                counts.total += 1;
                match s.status() {
                    SubmissionStatus::Pending => counts.pending += 1,
                    SubmissionStatus::InProgress => counts.in_progress += 1,
                    SubmissionStatus::Resolved => counts.resolved += 1,
                }
                counts
            })
    }
}

fn matches_search(submission: &Submission, needle: &str) -> bool {
    [
        submission.title(),
        submission.description(),
        submission.student_id(),
        submission.room_number(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

impl ViewFilter {
    /// `needle` is the search term already lowercased.
    fn matches(&self, submission: &Submission, needle: Option<&str>) -> bool {
        self.status.matches(&submission.status())
            && self.kind.matches(&submission.kind())
            && needle.is_none_or(|needle| matches_search(submission, needle))
    }
}

/// Apply `filter` and `order` to `submissions`, returning a new sequence.
/// The input is never reordered or modified.
pub fn filter_view<'a>(
    submissions: impl IntoIterator<Item = &'a Submission>,
    filter: &ViewFilter,
    order: ViewOrder,
) -> Vec<Submission> {
    let needle = filter.search.as_deref().map(str::to_lowercase);
    let mut view: Vec<Submission> = submissions
        .into_iter()
        .filter(|s| filter.matches(s, needle.as_deref()))
        .cloned()
        .collect();

    if order == ViewOrder::Triage {
        // stable: equal (rank, timestamp) pairs keep insertion order
        view.sort_by(|a, b| {
            a.status()
                .rank()
                .cmp(&b.status().rank())
                .then_with(|| b.timestamp().cmp(&a.timestamp()))
        });
    }
    view
}

/// Everything, triage-ordered, with free-text search.
pub fn admin_view(submissions: &[Submission], filter: &ViewFilter) -> Vec<Submission> {
    filter_view(submissions, filter, ViewOrder::Triage)
}

/// One student's own submissions in the order they were filed.
pub fn student_view(
    submissions: &[Submission],
    student_id: &str,
    status: Filter<SubmissionStatus>,
    kind: Filter<SubmissionKind>,
) -> Vec<Submission> {
    let own = submissions.iter().filter(|s| s.student_id() == student_id);
    let filter = ViewFilter {
        status,
        kind,
        search: None,
    };
    filter_view(own, &filter, ViewOrder::AsSubmitted)
}
