//! Domain types shared by every layer of the hostel desk.
//!
//! No IO and no async here: closed enums for the values that enter the core as
//! text, the filter dimension type, the category catalog, and the error type.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod role;
pub mod submission;

pub use error::PortalError;
pub use filter::Filter;
pub use role::Role;
pub use submission::{Priority, SubmissionKind, SubmissionStatus, TimeSlot};
