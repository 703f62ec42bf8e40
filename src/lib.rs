pub mod audit;
pub mod config;
pub mod error;
pub mod store;
pub mod validation;

// Identity and role gate
pub mod auth;
pub mod rbac;

// Submissions
pub mod inflight;
pub mod submission;

// Entry points
pub mod api;
pub mod portal;
