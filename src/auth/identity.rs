use hostel_types::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PortalError;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub room_number: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// The actor behind the current session. Serialized with a `role` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Identity {
    Student(Student),
    Admin(Admin),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Admin(_) => Role::Admin,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Student(s) => s.id,
            Self::Admin(a) => a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Student(s) => &s.name,
            Self::Admin(a) => &a.name,
        }
    }

    /// Same account, ignoring the id minted at each sign-in.
    pub fn same_actor(&self, other: &Identity) -> bool {
        match (self, other) {
            (Self::Student(a), Self::Student(b)) => a.student_id == b.student_id,
            (Self::Admin(a), Self::Admin(b)) => a.email == b.email,
            _ => false,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Self::Student(s) => Some(s),
            Self::Admin(_) => None,
        }
    }
}

/// Details a student enters on the registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub room_number: String,
    pub phone: String,
}

impl StudentProfile {
    pub fn validate(&self) -> Result<(), PortalError> {
        validation::check_required("name", &self.name, 255)?;
        validation::check_email(&self.email)?;
        validation::check_required("student_id", &self.student_id, 50)?;
        validation::check_required("room_number", &self.room_number, 20)?;
        validation::check_phone(&self.phone)?;
        Ok(())
    }

    pub fn into_student(self) -> Student {
        Student {
            id: Uuid::new_v4(),
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            student_id: self.student_id.trim().to_owned(),
            room_number: self.room_number.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
        }
    }
}
