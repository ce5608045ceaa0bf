use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, JobApplication, NewApplication};
use crate::store::RepositoryError;
use crate::workflows::jobs::{Job, JobId};
use crate::workflows::users::{User, UserId, UserView};

/// Application row joined with its job and applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDetails {
    pub application: JobApplication,
    pub job: Job,
    pub applicant: User,
}

impl ApplicationDetails {
    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            id: self.application.id,
            job: self.job.clone(),
            user: self.applicant.view(),
            status: self.application.status,
            applied_at: self.application.applied_at,
        }
    }
}

/// Application storage. Joins are explicit queries so callers never chase references.
///
/// Implementations must reject a second row for the same (job, user) pair with
/// [`RepositoryError::Conflict`].
pub trait ApplicationRepository: Send + Sync {
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<JobApplication, RepositoryError>;
    fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<JobApplication>, RepositoryError>;
    fn application_exists(&self, job: JobId, user: UserId) -> Result<bool, RepositoryError>;
    /// Overwrites the stored row; [`RepositoryError::NotFound`] if it is gone.
    fn update_application(&self, application: JobApplication) -> Result<(), RepositoryError>;
    fn joined_by_user(&self, user: UserId) -> Result<Vec<ApplicationDetails>, RepositoryError>;
    fn joined_by_job(&self, job: JobId) -> Result<Vec<ApplicationDetails>, RepositoryError>;
}

/// Response projection for the listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationView {
    pub id: ApplicationId,
    pub job: Job,
    pub user: UserView,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}
