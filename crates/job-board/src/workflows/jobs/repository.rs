use chrono::{DateTime, Utc};

use super::domain::{Job, JobId, JobPosting};
use crate::store::RepositoryError;
use crate::workflows::users::UserId;

/// Job table access.
pub trait JobRepository: Send + Sync {
    fn insert_job(&self, posting: JobPosting, posted_at: DateTime<Utc>)
        -> Result<Job, RepositoryError>;
    fn fetch_job(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;
    /// All postings in identity order.
    fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError>;
    fn jobs_posted_by(&self, poster: UserId) -> Result<Vec<Job>, RepositoryError>;
    /// Removes the job and every application filed against it.
    fn delete_job(&self, id: JobId) -> Result<(), RepositoryError>;
}
