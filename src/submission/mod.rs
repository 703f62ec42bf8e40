pub mod draft;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod store;

pub use draft::SubmissionDraft;
pub use model::{Submission, SubmissionDetails};
pub use query::{StatusCounts, ViewFilter, ViewOrder};
pub use store::{Clock, SubmissionStore, SystemClock};
