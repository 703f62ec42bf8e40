use hostel_types::Role;
use serde::Deserialize;

use crate::api::{Outcome, Screen};
use crate::auth::StudentProfile;
use crate::error::PortalError;
use crate::inflight::FormKind;
use crate::portal::Portal;
use crate::rbac::resolver;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub form: String,
}

pub async fn login(portal: &Portal, body: LoginRequest) -> Result<Outcome, PortalError> {
    let role: Role = body.role.parse()?;
    let identity = portal.authenticate(role, &body.email, &body.password).await?;
    let screen = match role {
        Role::Student => Screen::Dashboard,
        Role::Admin => Screen::AdminDashboard,
    };
    Outcome::navigate(screen, identity)
}

pub async fn register(portal: &Portal, profile: StudentProfile) -> Result<Outcome, PortalError> {
    let identity = portal.register(profile).await?;
    Outcome::navigate(Screen::Dashboard, identity)
}

pub fn logout(portal: &Portal) -> Result<Outcome, PortalError> {
    let previous = portal.logout();
    Outcome::data(serde_json::json!({ "signed_out": previous.is_some() }))
}

pub fn whoami(portal: &Portal) -> Result<Outcome, PortalError> {
    let identity = portal.current_identity();
    let permissions = identity
        .as_ref()
        .map(|i| resolver::role_permissions(i.role()))
        .unwrap_or_default();
    Outcome::data(serde_json::json!({
        "identity": identity,
        "permissions": permissions,
    }))
}

pub fn cancel(portal: &Portal, body: &CancelRequest) -> Result<Outcome, PortalError> {
    let form: FormKind = body.form.parse()?;
    Outcome::data(serde_json::json!({ "form": form, "cancelled": portal.cancel(form) }))
}
