use hostel_types::{Filter, Priority, SubmissionKind, SubmissionStatus, TimeSlot};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{Outcome, Screen};
use crate::error::PortalError;
use crate::portal::{Portal, ViewParams};
use crate::submission::SubmissionDraft;
use crate::validation;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Flat form payload. Which fields apply depends on `type`; the rest must be
/// absent or blank.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSubmissionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListSubmissionsParams {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesParams {
    #[serde(rename = "type")]
    pub kind: String,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn reject_field(
    kind: SubmissionKind,
    field: &str,
    value: Option<&String>,
) -> Result<(), PortalError> {
    match value {
        Some(_) => Err(PortalError::Validation(format!(
            "{field} does not apply to {kind} submissions"
        ))),
        None => Ok(()),
    }
}

impl CreateSubmissionRequest {
    pub fn into_draft(self) -> Result<SubmissionDraft, PortalError> {
        let kind: SubmissionKind = self.kind.parse()?;
        let title = present(self.title);
        let description = present(self.description);
        let category = present(self.category);
        let priority = present(self.priority);
        let preferred_date = present(self.preferred_date);
        let preferred_time = present(self.preferred_time);

        match kind {
            SubmissionKind::Complaint => {
                reject_field(kind, "preferred_date", preferred_date.as_ref())?;
                reject_field(kind, "preferred_time", preferred_time.as_ref())?;
                Ok(SubmissionDraft::Complaint {
                    title: title.unwrap_or_default(),
                    description: description.unwrap_or_default(),
                    category: category.unwrap_or_default(),
                    priority: priority.map(|p| p.parse::<Priority>()).transpose()?,
                })
            }
            SubmissionKind::Query => {
                reject_field(kind, "priority", priority.as_ref())?;
                reject_field(kind, "preferred_date", preferred_date.as_ref())?;
                reject_field(kind, "preferred_time", preferred_time.as_ref())?;
                Ok(SubmissionDraft::Query {
                    title: title.unwrap_or_default(),
                    description: description.unwrap_or_default(),
                    category: category.unwrap_or_default(),
                })
            }
            SubmissionKind::Cleaning => {
                reject_field(kind, "category", category.as_ref())?;
                reject_field(kind, "priority", priority.as_ref())?;
                Ok(SubmissionDraft::Cleaning {
                    title,
                    description,
                    preferred_date: preferred_date
                        .map(|d| validation::parse_date("preferred_date", &d))
                        .transpose()?,
                    preferred_time: preferred_time
                        .map(|t| t.parse::<TimeSlot>())
                        .transpose()?,
                })
            }
        }
    }
}

impl ListSubmissionsParams {
    pub fn into_view_params(self) -> Result<ViewParams, PortalError> {
        let status: Filter<SubmissionStatus> = self.status.as_deref().unwrap_or("").parse()?;
        let kind: Filter<SubmissionKind> = self.kind.as_deref().unwrap_or("").parse()?;
        Ok(ViewParams {
            status,
            kind,
            search: present(self.search),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn create(
    portal: &Portal,
    body: CreateSubmissionRequest,
) -> Result<Outcome, PortalError> {
    let draft = body.into_draft()?;
    let submission = portal.create_submission(draft).await?;
    Outcome::navigate(Screen::Dashboard, submission)
}

pub fn update_status(portal: &Portal, body: &UpdateStatusRequest) -> Result<Outcome, PortalError> {
    let id = Uuid::parse_str(body.id.trim())
        .map_err(|_| PortalError::Validation(format!("invalid submission id: {}", body.id)))?;
    let status: SubmissionStatus = body.status.parse()?;
    let submission = portal.update_status(id, status)?;
    Outcome::data(submission)
}

pub fn list(portal: &Portal, params: ListSubmissionsParams) -> Result<Outcome, PortalError> {
    let view = portal.filter_view(params.into_view_params()?)?;
    Outcome::data(view)
}

pub fn categories(params: &CategoriesParams) -> Result<Outcome, PortalError> {
    let kind: SubmissionKind = params.kind.parse()?;
    Outcome::data(serde_json::json!({
        "type": kind,
        "categories": Portal::categories(kind),
    }))
}
