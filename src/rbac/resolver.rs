use hostel_types::Role;

use crate::auth::Identity;
use crate::error::PortalError;
use crate::rbac::types::Permission;

const STUDENT_PERMISSIONS: &[Permission] =
    &[Permission::SubmissionCreate, Permission::SubmissionReadOwn];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::SubmissionReadAll,
    Permission::SubmissionTransition,
];

pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Student => STUDENT_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
    }
}

pub fn has_permission(identity: &Identity, perm: Permission) -> bool {
    role_permissions(identity.role()).contains(&perm)
}

/// `Err(PortalError::Forbidden)` unless the identity's role grants `perm`.
pub fn require_permission(identity: &Identity, perm: Permission) -> Result<(), PortalError> {
    if has_permission(identity, perm) {
        return Ok(());
    }
    tracing::warn!(
        actor_id = %identity.id(),
        role = %identity.role(),
        permission = %perm,
        "permission denied"
    );
    Err(PortalError::Forbidden)
}
