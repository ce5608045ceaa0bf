use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{
    ApplicationId, ApplicationRequest, ApplicationStatus, JobApplication, NewApplication,
};
use super::repository::{ApplicationRepository, ApplicationView};
use crate::error::ServiceError;
use crate::store::RepositoryError;
use crate::workflows::jobs::{Job, JobId, JobRepository};
use crate::workflows::users::{User, UserId, UserRepository};

const DUPLICATE_APPLICATION: &str = "You have already applied to this job";

/// Service composing the application, job and user tables.
pub struct ApplicationWorkflow<A, J, U> {
    applications: Arc<A>,
    jobs: Arc<J>,
    users: Arc<U>,
}

/// Result of a successful `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationReceipt {
    pub application: JobApplication,
    pub job_title: String,
}

impl ApplicationReceipt {
    pub fn message(&self) -> String {
        format!("Applied to {}", self.job_title)
    }
}

impl<A, J, U> ApplicationWorkflow<A, J, U>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(applications: Arc<A>, jobs: Arc<J>, users: Arc<U>) -> Self {
        Self {
            applications,
            jobs,
            users,
        }
    }

    /// File an application. The job is resolved before the user, so a request naming two
    /// missing rows reports the job.
    pub fn apply(&self, request: ApplicationRequest) -> Result<ApplicationReceipt, ServiceError> {
        let job = self.load_job(request.job_id)?;
        let user = self.load_user(request.user_id)?;

        if job.posted_by == user.id {
            warn!(job_id = %job.id, user_id = %user.id, "application rejected: own posting");
            return Err(ServiceError::invalid_request(
                "You cannot apply to your own job posting",
            ));
        }

        if self.applications.application_exists(job.id, user.id)? {
            warn!(job_id = %job.id, user_id = %user.id, "application rejected: duplicate");
            return Err(ServiceError::conflict(DUPLICATE_APPLICATION));
        }

        let application = self
            .applications
            .insert_application(NewApplication {
                job_id: job.id,
                user_id: user.id,
                status: ApplicationStatus::Applied,
                applied_at: Utc::now(),
            })
            .map_err(|err| match err {
                RepositoryError::Conflict(_) => ServiceError::conflict(DUPLICATE_APPLICATION),
                other => ServiceError::Repository(other),
            })?;

        info!(
            application_id = %application.id,
            job_id = %job.id,
            user_id = %user.id,
            "application submitted"
        );

        Ok(ApplicationReceipt {
            application,
            job_title: job.title,
        })
    }

    pub fn list_by_user(&self, user_id: UserId) -> Result<Vec<ApplicationView>, ServiceError> {
        self.load_user(user_id)?;
        let rows = self.applications.joined_by_user(user_id)?;
        Ok(rows.iter().map(|row| row.view()).collect())
    }

    pub fn list_by_job(&self, job_id: JobId) -> Result<Vec<ApplicationView>, ServiceError> {
        self.load_job(job_id)?;
        let rows = self.applications.joined_by_job(job_id)?;
        Ok(rows.iter().map(|row| row.view()).collect())
    }

    /// Overwrite the status. Every transition is allowed, including a no-op.
    pub fn update_status(
        &self,
        application_id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ServiceError> {
        let mut application = self
            .applications
            .fetch_application(application_id)?
            .ok_or_else(|| ServiceError::not_found("Application not found"))?;

        let previous = application.status;
        application.status = status;
        self.applications
            .update_application(application.clone())
            .map_err(|err| match err {
                RepositoryError::NotFound => ServiceError::not_found("Application not found"),
                other => ServiceError::Repository(other),
            })?;

        info!(
            application_id = %application.id,
            from = previous.label(),
            to = status.label(),
            "application status updated"
        );
        Ok(application)
    }

    pub fn get(&self, application_id: ApplicationId) -> Result<JobApplication, ServiceError> {
        self.applications
            .fetch_application(application_id)?
            .ok_or_else(|| ServiceError::not_found("Application not found"))
    }

    fn load_job(&self, id: JobId) -> Result<Job, ServiceError> {
        self.jobs
            .fetch_job(id)?
            .ok_or_else(|| ServiceError::not_found("Job does not exist"))
    }

    fn load_user(&self, id: UserId) -> Result<User, ServiceError> {
        self.users
            .fetch_user(id)?
            .ok_or_else(|| ServiceError::not_found("User does not exist"))
    }
}
