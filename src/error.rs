use std::sync::{Mutex, MutexGuard, PoisonError};

pub use hostel_types::error::PortalError;

/// Lock a state slice. A panic while holding the lock leaves plain data behind,
/// so a poisoned lock is recovered rather than propagated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        tracing::warn!("recovering poisoned state lock");
        poisoned.into_inner()
    })
}
