use std::sync::Arc;

use hostel_types::{Filter, Role, SubmissionKind, SubmissionStatus, catalog};
use serde::Serialize;
use uuid::Uuid;

use crate::audit::{AuditEntry, write_audit};
use crate::auth::{Identity, StudentProfile, credentials};
use crate::config::Config;
use crate::error::{PortalError, lock};
use crate::inflight::{FormKind, InFlight};
use crate::rbac::{Permission, resolver};
use crate::store::AppState;
use crate::submission::{
    Clock, StatusCounts, Submission, SubmissionDraft, ViewFilter, lifecycle, query,
};

/// Parameters for a filtered view. `search` is honoured for admins only.
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    pub status: Filter<SubmissionStatus>,
    pub kind: Filter<SubmissionKind>,
    pub search: Option<String>,
}

/// A computed view plus the dashboard counters for the caller's scope.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub scope: Role,
    pub items: Vec<Submission>,
    pub counts: StatusCounts,
}

/// The desk as the presentation layer sees it: one entry point per operation,
/// all of them working on a shared `AppState`.
#[derive(Clone)]
pub struct Portal {
    state: AppState,
    inflight: InFlight,
}

impl Portal {
    pub fn new(config: Config) -> Self {
        Self::from_state(AppState::new(config))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self::from_state(AppState::with_clock(config, clock))
    }

    fn from_state(state: AppState) -> Self {
        let inflight = InFlight::new(state.config.submit_delay);
        Self { state, inflight }
    }

    pub fn submission_count(&self) -> usize {
        lock(&self.state.submissions).len()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        lock(&self.state.session).current().cloned()
    }

    fn require_identity(&self) -> Result<Identity, PortalError> {
        lock(&self.state.session).require().cloned()
    }

    /// Make `identity` the active one. Switching to a different account aborts
    /// whatever the previous one left pending, except `form` itself.
    fn activate(&self, identity: Identity, form: FormKind, action: &str) {
        let displaced = lock(&self.state.session).activate(identity.clone());
        if displaced.is_some_and(|previous| !previous.same_actor(&identity)) {
            self.inflight.cancel_except(form);
        }
        write_audit(&AuditEntry {
            actor_id: identity.id(),
            actor_name: identity.name(),
            action,
            resource: "session",
            resource_id: None,
            detail: Some(serde_json::json!({"role": identity.role()})),
        });
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Check credentials for `role` and, on success, make that identity the
    /// active one. A mismatch leaves the session untouched.
    #[tracing::instrument(skip_all, fields(%role, %email), err)]
    pub async fn authenticate(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<Identity, PortalError> {
        let config = Arc::clone(&self.state.config);
        let form = FormKind::for_login(role);
        self.inflight
            .run(form, || {
                let identity = match role {
                    Role::Student => Identity::Student(credentials::authenticate_student(
                        &config.student,
                        email,
                        password,
                    )?),
                    Role::Admin => Identity::Admin(credentials::authenticate_admin(
                        &config.admin,
                        email,
                        password,
                    )?),
                };
                self.activate(identity.clone(), form, "session.login");
                Ok(identity)
            })
            .await
    }

    /// Sign in as a newly described student. Nothing outlives the session.
    #[tracing::instrument(skip(self, profile), fields(student_id = %profile.student_id), err)]
    pub async fn register(&self, profile: StudentProfile) -> Result<Identity, PortalError> {
        profile.validate()?;
        self.inflight
            .run(FormKind::Register, || {
                let identity = Identity::Student(profile.into_student());
                self.activate(identity.clone(), FormKind::Register, "session.register");
                Ok(identity)
            })
            .await
    }

    /// Clear the active identity and abort anything it left pending.
    pub fn logout(&self) -> Option<Identity> {
        let previous = lock(&self.state.session).logout();
        self.inflight.cancel_all();
        if let Some(ref identity) = previous {
            write_audit(&AuditEntry {
                actor_id: identity.id(),
                actor_name: identity.name(),
                action: "session.logout",
                resource: "session",
                resource_id: None,
                detail: None,
            });
        }
        previous
    }

    // -----------------------------------------------------------------------
    // Submissions
    // -----------------------------------------------------------------------

    /// File `draft` as the signed-in student after the simulated round-trip.
    pub async fn create_submission(
        &self,
        draft: SubmissionDraft,
    ) -> Result<Submission, PortalError> {
        let identity = self.require_identity()?;
        resolver::require_permission(&identity, Permission::SubmissionCreate)?;

        let form = FormKind::for_submission(draft.kind());
        self.inflight
            .run(form, || {
                let current = self.require_identity()?;
                if !current.same_actor(&identity) {
                    return Err(PortalError::Cancelled);
                }
                lifecycle::create(&mut lock(&self.state.submissions), &current, draft)
            })
            .await
    }

    pub fn update_status(
        &self,
        id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, PortalError> {
        let identity = self.require_identity()?;
        lifecycle::transition(&mut lock(&self.state.submissions), &identity, id, status)
    }

    /// Admins get every submission in triage order with search; students get
    /// their own submissions in the order they filed them.
    pub fn filter_view(&self, params: ViewParams) -> Result<SubmissionView, PortalError> {
        let identity = self.require_identity()?;
        let store = lock(&self.state.submissions);

        match &identity {
            Identity::Admin(_) => {
                resolver::require_permission(&identity, Permission::SubmissionReadAll)?;
                let filter = ViewFilter {
                    status: params.status,
                    kind: params.kind,
                    search: params.search,
                };
                Ok(SubmissionView {
                    scope: Role::Admin,
                    items: query::admin_view(store.as_slice(), &filter),
                    counts: StatusCounts::tally(store.as_slice()),
                })
            }
            Identity::Student(student) => {
                resolver::require_permission(&identity, Permission::SubmissionReadOwn)?;
                if params.search.as_deref().is_some_and(|s| !s.is_empty()) {
                    return Err(PortalError::Validation(
                        "search is only available on the admin view".into(),
                    ));
                }
                let own = store
                    .as_slice()
                    .iter()
                    .filter(|s| s.student_id() == student.student_id);
                Ok(SubmissionView {
                    scope: Role::Student,
                    items: query::student_view(
                        store.as_slice(),
                        &student.student_id,
                        params.status,
                        params.kind,
                    ),
                    counts: StatusCounts::tally(own),
                })
            }
        }
    }

    // -----------------------------------------------------------------------
    // Forms
    // -----------------------------------------------------------------------

    /// Close a form: abort its pending operation, if it has one.
    pub fn cancel(&self, form: FormKind) -> bool {
        self.inflight.cancel(form)
    }

    pub fn is_pending(&self, form: FormKind) -> bool {
        self.inflight.is_pending(form)
    }

    /// Abort every pending operation, e.g. on process shutdown.
    pub fn shutdown(&self) {
        self.inflight.cancel_all();
    }

    pub fn categories(kind: SubmissionKind) -> &'static [&'static str] {
        catalog::categories_for(kind)
    }
}
