//! Job applications: filing, per-user and per-job listings, and reviewer status updates.
//!
//! The workflow rejects applications to a user's own posting and second applications to the
//! same job. Status changes are unconstrained: any status may replace any other.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationRequest, ApplicationStatus, JobApplication, NewApplication,
};
pub use repository::{ApplicationDetails, ApplicationRepository, ApplicationView};
pub use router::application_router;
pub use service::{ApplicationReceipt, ApplicationWorkflow};
