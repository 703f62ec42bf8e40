pub mod credentials;
pub mod identity;
pub mod session;

pub use identity::{Admin, Identity, Student, StudentProfile};
pub use session::Session;
