//! Job board backend: user sign-up and login, job postings, and job applications whose
//! status can be updated by reviewers.
//!
//! Each workflow is split into `domain`, `repository`, `service` and `router` modules so the
//! HTTP boundary, the business rules and the data store can be exercised independently.

pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod store;
pub mod telemetry;
pub mod validation;
pub mod workflows;
