use std::fmt;

/// Every operation the desk gates. Each role holds a fixed set; see
/// `resolver::role_permissions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    SubmissionCreate,
    SubmissionReadOwn,
    SubmissionReadAll,
    SubmissionTransition,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SubmissionCreate => "submission:create",
            Self::SubmissionReadOwn => "submission:read_own",
            Self::SubmissionReadAll => "submission:read_all",
            Self::SubmissionTransition => "submission:transition",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Permission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
