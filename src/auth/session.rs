use crate::auth::identity::Identity;
use crate::error::PortalError;

/// The single active identity for this run. Activating one replaces the other.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<Identity>,
}

impl Session {
    /// Make `identity` the active one, returning whoever it displaced.
    pub fn activate(&mut self, identity: Identity) -> Option<Identity> {
        self.active.replace(identity)
    }

    pub fn logout(&mut self) -> Option<Identity> {
        self.active.take()
    }

    pub fn current(&self) -> Option<&Identity> {
        self.active.as_ref()
    }

    pub fn require(&self) -> Result<&Identity, PortalError> {
        self.current().ok_or_else(PortalError::unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identity::{Admin, Student};
    use hostel_types::Role;
    use uuid::Uuid;

    fn student() -> Identity {
        Identity::Student(Student {
            id: Uuid::new_v4(),
            name: "S".into(),
            email: "s@test.local".into(),
            student_id: "STU1".into(),
            room_number: "A-1".into(),
            phone: "+1 555 0101".into(),
        })
    }

    fn admin() -> Identity {
        Identity::Admin(Admin {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@test.local".into(),
        })
    }

    #[test]
    fn starts_unauthenticated() {
        let session = Session::default();
        assert!(session.current().is_none());
        assert_eq!(session.require().unwrap_err().kind(), "authentication");
    }

    #[test]
    fn activating_admin_clears_student() {
        let mut session = Session::default();
        session.activate(student());
        let previous = session.activate(admin());
        assert_eq!(previous.map(|i| i.role()), Some(Role::Student));
        assert_eq!(session.current().map(Identity::role), Some(Role::Admin));
    }

    #[test]
    fn logout_clears_identity() {
        let mut session = Session::default();
        session.activate(admin());
        assert!(session.logout().is_some());
        assert!(session.current().is_none());
        assert!(session.logout().is_none());
    }
}
