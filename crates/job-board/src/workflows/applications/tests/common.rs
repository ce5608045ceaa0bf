use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::store::{MemoryStore, RepositoryError};
use crate::workflows::applications::domain::{
    ApplicationId, ApplicationRequest, JobApplication, NewApplication,
};
use crate::workflows::applications::repository::{ApplicationDetails, ApplicationRepository};
use crate::workflows::applications::{application_router, ApplicationWorkflow};
use crate::workflows::jobs::{Job, JobId, JobPosting, JobRepository, JobType};
use crate::workflows::users::{Registration, Role, User, UserId, UserRepository};

pub(super) type MemoryWorkflow = ApplicationWorkflow<MemoryStore, MemoryStore, MemoryStore>;

/// Bob posts a job; Alice is a job seeker with no applications yet.
pub(super) struct Board {
    pub(super) store: Arc<MemoryStore>,
    pub(super) workflow: Arc<MemoryWorkflow>,
    pub(super) alice: User,
    pub(super) bob: User,
    pub(super) job: Job,
}

impl Board {
    pub(super) fn request(&self) -> ApplicationRequest {
        ApplicationRequest {
            job_id: self.job.id,
            user_id: self.alice.id,
        }
    }
}

pub(super) fn registration(name: &str, email: &str, role: Role) -> Registration {
    Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        role,
    }
}

pub(super) fn posting(poster: UserId) -> JobPosting {
    JobPosting {
        posted_by: poster,
        title: "Backend Engineer".to_string(),
        description: "Own the job board API".to_string(),
        location: "Remote".to_string(),
        company_name: "Acme".to_string(),
        salary: Some("120k".to_string()),
        job_type: JobType::FullTime,
    }
}

pub(super) fn board() -> Board {
    let store = Arc::new(MemoryStore::default());
    let alice = store
        .insert_user(registration("Alice", "a@x.com", Role::Jobseeker), Utc::now())
        .expect("insert alice");
    let bob = store
        .insert_user(registration("Bob", "b@x.com", Role::Employer), Utc::now())
        .expect("insert bob");
    let job = store
        .insert_job(posting(bob.id), Utc::now())
        .expect("insert job");
    let workflow = Arc::new(ApplicationWorkflow::new(
        store.clone(),
        store.clone(),
        store.clone(),
    ));

    Board {
        store,
        workflow,
        alice,
        bob,
        job,
    }
}

pub(super) fn board_router(board: &Board) -> axum::Router {
    application_router(board.workflow.clone())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_conflict_response(response: &Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Existence checks always pass but the insert hits the unique constraint, as when two
/// identical requests race.
pub(super) struct RacingApplications;

impl ApplicationRepository for RacingApplications {
    fn insert_application(
        &self,
        _application: NewApplication,
    ) -> Result<JobApplication, RepositoryError> {
        Err(RepositoryError::Conflict("job_applications.job_id_user_id"))
    }

    fn fetch_application(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        Ok(None)
    }

    fn application_exists(&self, _job: JobId, _user: UserId) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn update_application(&self, _application: JobApplication) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn joined_by_user(&self, _user: UserId) -> Result<Vec<ApplicationDetails>, RepositoryError> {
        Ok(Vec::new())
    }

    fn joined_by_job(&self, _job: JobId) -> Result<Vec<ApplicationDetails>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableApplications;

impl ApplicationRepository for UnavailableApplications {
    fn insert_application(
        &self,
        _application: NewApplication,
    ) -> Result<JobApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_application(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn application_exists(&self, _job: JobId, _user: UserId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_application(&self, _application: JobApplication) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn joined_by_user(&self, _user: UserId) -> Result<Vec<ApplicationDetails>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn joined_by_job(&self, _job: JobId) -> Result<Vec<ApplicationDetails>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
