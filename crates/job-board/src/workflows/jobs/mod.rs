//! Job postings: create, browse, look up by poster, and withdraw.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Job, JobId, JobPosting, JobType};
pub use repository::JobRepository;
pub use router::job_router;
pub use service::JobCatalogue;
