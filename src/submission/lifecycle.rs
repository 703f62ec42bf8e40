use chrono::NaiveDate;
use hostel_types::catalog::DEFAULT_CLEANING_TITLE;
use hostel_types::SubmissionStatus;
use uuid::Uuid;

use crate::audit::{AuditEntry, write_audit};
use crate::auth::Identity;
use crate::error::PortalError;
use crate::rbac::{Permission, resolver};
use crate::validation;

use super::draft::SubmissionDraft;
use super::model::{Submission, SubmissionDetails};
use super::store::{NewSubmission, SubmissionStore};

const TITLE_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 5000;
const CATEGORY_MAX: usize = 100;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// File a new submission on behalf of a student and append it to the store.
#[tracing::instrument(skip_all, fields(kind = %draft.kind(), actor_id = %identity.id()), err)]
pub fn create(
    store: &mut SubmissionStore,
    identity: &Identity,
    draft: SubmissionDraft,
) -> Result<Submission, PortalError> {
    resolver::require_permission(identity, Permission::SubmissionCreate)?;
    let student = identity.as_student().ok_or(PortalError::Forbidden)?;

    let today = store.now().date_naive();
    let (title, description, details) = validate_draft(draft, today)?;

    let submission = store
        .append(NewSubmission {
            title,
            description,
            details,
            student_id: student.student_id.clone(),
            room_number: student.room_number.clone(),
        })
        .clone();

    write_audit(&AuditEntry {
        actor_id: student.id,
        actor_name: &student.name,
        action: "submission.create",
        resource: "submission",
        resource_id: Some(submission.id()),
        detail: Some(serde_json::json!({
            "type": submission.kind(),
            "title": submission.title(),
        })),
    });

    tracing::info!(id = %submission.id(), "submission created");
    Ok(submission)
}

fn validate_draft(
    draft: SubmissionDraft,
    today: NaiveDate,
) -> Result<(String, String, SubmissionDetails), PortalError> {
    match draft {
        SubmissionDraft::Complaint {
            title,
            description,
            category,
            priority,
        } => {
            check_text_fields(&title, &description, &category)?;
            Ok((
                title.trim().to_owned(),
                description.trim().to_owned(),
                SubmissionDetails::Complaint {
                    category: category.trim().to_owned(),
                    priority: priority.unwrap_or_default(),
                },
            ))
        }
        SubmissionDraft::Query {
            title,
            description,
            category,
        } => {
            check_text_fields(&title, &description, &category)?;
            Ok((
                title.trim().to_owned(),
                description.trim().to_owned(),
                SubmissionDetails::Query {
                    category: category.trim().to_owned(),
                },
            ))
        }
        SubmissionDraft::Cleaning {
            title,
            description,
            preferred_date,
            preferred_time,
        } => {
            let title = title
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_CLEANING_TITLE.to_owned());
            validation::check_length("title", &title, 1, TITLE_MAX)?;

            let description = description.map(|d| d.trim().to_owned()).unwrap_or_default();
            validation::check_length("description", &description, 0, DESCRIPTION_MAX)?;

            if let Some(date) = preferred_date {
                validation::check_preferred_date(date, today)?;
            }

            Ok((
                title,
                description,
                SubmissionDetails::Cleaning {
                    preferred_date,
                    preferred_time: preferred_time.unwrap_or_default(),
                },
            ))
        }
    }
}

fn check_text_fields(title: &str, description: &str, category: &str) -> Result<(), PortalError> {
    validation::check_required("title", title, TITLE_MAX)?;
    validation::check_required("description", description, DESCRIPTION_MAX)?;
    validation::check_required("category", category, CATEGORY_MAX)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// Move a submission to `status`. Any status may follow any other.
#[tracing::instrument(skip(store, identity), fields(actor_id = %identity.id()), err)]
pub fn transition(
    store: &mut SubmissionStore,
    identity: &Identity,
    id: Uuid,
    status: SubmissionStatus,
) -> Result<Submission, PortalError> {
    resolver::require_permission(identity, Permission::SubmissionTransition)?;

    let (previous, submission) = store
        .update_status(id, status)
        .ok_or_else(|| PortalError::NotFound("submission".into()))?;
    let submission = submission.clone();

    write_audit(&AuditEntry {
        actor_id: identity.id(),
        actor_name: identity.name(),
        action: "submission.transition",
        resource: "submission",
        resource_id: Some(id),
        detail: Some(serde_json::json!({"from": previous, "to": status})),
    });

    tracing::info!(from = %previous, to = %status, "submission status changed");
    Ok(submission)
}
