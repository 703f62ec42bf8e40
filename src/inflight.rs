use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use hostel_types::{Role, SubmissionKind};
use serde::Serialize;
use tokio::sync::watch;

use crate::error::PortalError;

/// A presentation-layer entry point. Each one may have at most one operation
/// waiting on the artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Complaint,
    Query,
    Cleaning,
    StudentLogin,
    AdminLogin,
    Register,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Query => "query",
            Self::Cleaning => "cleaning",
            Self::StudentLogin => "student_login",
            Self::AdminLogin => "admin_login",
            Self::Register => "register",
        }
    }

    pub fn for_submission(kind: SubmissionKind) -> Self {
        match kind {
            SubmissionKind::Complaint => Self::Complaint,
            SubmissionKind::Query => Self::Query,
            SubmissionKind::Cleaning => Self::Cleaning,
        }
    }

    pub fn for_login(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentLogin,
            Role::Admin => Self::AdminLogin,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complaint" => Ok(Self::Complaint),
            "query" => Ok(Self::Query),
            "cleaning" => Ok(Self::Cleaning),
            "student_login" => Ok(Self::StudentLogin),
            "admin_login" => Ok(Self::AdminLogin),
            "register" => Ok(Self::Register),
            other => Err(PortalError::Validation(format!("unknown form: {other}"))),
        }
    }
}

/// Releases a form's slot when the pending operation finishes, fails, or is dropped.
struct SlotGuard {
    slots: Arc<DashMap<FormKind, watch::Sender<()>>>,
    form: FormKind,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.slots.remove(&self.form);
    }
}

/// Simulated round-trip latency with one in-flight slot per form.
///
/// Each pending operation races its delay against two signals: its own form's
/// cancel channel and a shared shutdown channel that aborts every form at once.
#[derive(Clone)]
pub struct InFlight {
    slots: Arc<DashMap<FormKind, watch::Sender<()>>>,
    shutdown: Arc<watch::Sender<()>>,
    delay: Duration,
}

impl fmt::Debug for InFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InFlight")
            .field("pending", &self.slots.len())
            .field("delay", &self.delay)
            .finish()
    }
}

impl InFlight {
    pub fn new(delay: Duration) -> Self {
        let (shutdown, _) = watch::channel(());
        Self {
            slots: Arc::new(DashMap::new()),
            shutdown: Arc::new(shutdown),
            delay,
        }
    }

    pub fn is_pending(&self, form: FormKind) -> bool {
        self.slots.contains_key(&form)
    }

    /// Abort the operation pending on `form`, if any. Returns whether one was pending.
    pub fn cancel(&self, form: FormKind) -> bool {
        match self.slots.get(&form) {
            Some(tx) => {
                tx.send_replace(());
                tracing::info!(%form, "pending form cancelled");
                true
            }
            None => false,
        }
    }

    /// Abort every pending operation.
    pub fn cancel_all(&self) {
        self.shutdown.send_replace(());
    }

    /// Abort every pending operation except the one on `keep`.
    pub fn cancel_except(&self, keep: FormKind) {
        for slot in self.slots.iter().filter(|slot| *slot.key() != keep) {
            slot.value().send_replace(());
            tracing::info!(form = %slot.key(), "pending form cancelled");
        }
    }

    fn acquire(&self, form: FormKind) -> Result<(SlotGuard, watch::Receiver<()>), PortalError> {
        match self.slots.entry(form) {
            Entry::Occupied(_) => Err(PortalError::Conflict(format!(
                "{form} submission already in progress"
            ))),
            Entry::Vacant(slot) => {
                let (tx, rx) = watch::channel(());
                slot.insert(tx);
                Ok((
                    SlotGuard {
                        slots: Arc::clone(&self.slots),
                        form,
                    },
                    rx,
                ))
            }
        }
    }

    /// Wait out the delay on `form`'s slot, then run `op`.
    ///
    /// Fails with `Conflict` if the form already has a pending operation, and
    /// with `Cancelled` if the form or the whole desk is cancelled first; `op`
    /// does not run in either case.
    pub async fn run<T, F>(&self, form: FormKind, op: F) -> Result<T, PortalError>
    where
        F: FnOnce() -> Result<T, PortalError>,
    {
        let (guard, mut cancelled) = self.acquire(form)?;
        let mut shutdown = self.shutdown.subscribe();
        tracing::debug!(%form, delay_ms = self.delay.as_millis(), "form pending");

        let result = tokio::select! {
            _ = cancelled.changed() => Err(PortalError::Cancelled),
            _ = shutdown.changed() => Err(PortalError::Cancelled),
            () = tokio::time::sleep(self.delay) => op(),
        };

        drop(guard);
        result
    }
}
