//! Line-oriented JSON protocol between the desk and its presentation layer.
//!
//! Each request is one JSON object tagged by `op`; each response echoes the
//! request's sequence number and carries either `data` or an `error`.

pub mod sessions;
pub mod submissions;

use serde::{Deserialize, Serialize};

use crate::auth::StudentProfile;
use crate::error::PortalError;
use crate::portal::Portal;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Login(sessions::LoginRequest),
    Register(StudentProfile),
    Logout,
    Whoami,
    Cancel(sessions::CancelRequest),
    Submit(submissions::CreateSubmissionRequest),
    UpdateStatus(submissions::UpdateStatusRequest),
    List(submissions::ListSubmissionsParams),
    Categories(submissions::CategoriesParams),
}

/// Screen the presentation layer should move to after a successful operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    AdminDashboard,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub seq: u64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate: Option<Screen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// What a handler produced: a payload and, optionally, where to go next.
#[derive(Debug)]
pub struct Outcome {
    pub navigate: Option<Screen>,
    pub data: serde_json::Value,
}

impl Outcome {
    pub fn data(value: impl Serialize) -> Result<Self, PortalError> {
        Ok(Self {
            navigate: None,
            data: to_value(value)?,
        })
    }

    pub fn navigate(screen: Screen, value: impl Serialize) -> Result<Self, PortalError> {
        Ok(Self {
            navigate: Some(screen),
            data: to_value(value)?,
        })
    }
}

fn to_value(value: impl Serialize) -> Result<serde_json::Value, PortalError> {
    serde_json::to_value(value).map_err(|e| PortalError::Internal(e.into()))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub async fn dispatch(portal: &Portal, request: Request) -> Result<Outcome, PortalError> {
    match request {
        Request::Login(body) => sessions::login(portal, body).await,
        Request::Register(profile) => sessions::register(portal, profile).await,
        Request::Logout => sessions::logout(portal),
        Request::Whoami => sessions::whoami(portal),
        Request::Cancel(body) => sessions::cancel(portal, &body),
        Request::Submit(body) => submissions::create(portal, body).await,
        Request::UpdateStatus(body) => submissions::update_status(portal, &body),
        Request::List(params) => submissions::list(portal, params),
        Request::Categories(params) => submissions::categories(&params),
    }
}

/// Parse and run one request line, turning every failure into an error response.
pub async fn handle_line(portal: &Portal, seq: u64, line: &str) -> Response {
    let result = match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(portal, request).await,
        Err(e) => Err(PortalError::Validation(format!("malformed request: {e}"))),
    };

    match result {
        Ok(outcome) => Response {
            seq,
            ok: true,
            navigate: outcome.navigate,
            data: Some(outcome.data),
            error: None,
        },
        Err(err) => {
            if let PortalError::Internal(ref inner) = err {
                tracing::error!(error = %inner, seq, "internal error");
            }
            Response {
                seq,
                ok: false,
                navigate: None,
                data: None,
                error: Some(ErrorBody {
                    kind: err.kind(),
                    message: err.display_message(),
                }),
            }
        }
    }
}
