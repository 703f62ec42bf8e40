use uuid::Uuid;

use crate::auth::identity::{Admin, Student};
use crate::config::{AdminAccount, StudentAccount};
use crate::error::PortalError;

const STUDENT_MISMATCH: &str = "Invalid credentials. Please check your email and password.";
const ADMIN_MISMATCH: &str = "Invalid admin credentials. Please check your email and password.";

/// Compare against the configured student account. Literal comparison only.
pub fn authenticate_student(
    account: &StudentAccount,
    email: &str,
    password: &str,
) -> Result<Student, PortalError> {
    if email != account.email || password != account.password {
        tracing::info!(%email, "student credential mismatch");
        return Err(PortalError::Unauthorized(STUDENT_MISMATCH.into()));
    }

    Ok(Student {
        id: Uuid::new_v4(),
        name: account.name.clone(),
        email: account.email.clone(),
        student_id: account.student_id.clone(),
        room_number: account.room_number.clone(),
        phone: account.phone.clone(),
    })
}

pub fn authenticate_admin(
    account: &AdminAccount,
    email: &str,
    password: &str,
) -> Result<Admin, PortalError> {
    if email != account.email || password != account.password {
        tracing::info!(%email, "admin credential mismatch");
        return Err(PortalError::Unauthorized(ADMIN_MISMATCH.into()));
    }

    Ok(Admin {
        id: Uuid::new_v4(),
        name: account.name.clone(),
        email: account.email.clone(),
    })
}
