use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{Job, JobId, JobPosting};
use super::repository::JobRepository;
use crate::error::ServiceError;
use crate::store::RepositoryError;
use crate::workflows::users::{UserId, UserRepository};

pub struct JobCatalogue<J, U> {
    jobs: Arc<J>,
    users: Arc<U>,
}

impl<J, U> JobCatalogue<J, U>
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(jobs: Arc<J>, users: Arc<U>) -> Self {
        Self { jobs, users }
    }

    /// Publish a posting on behalf of an existing user.
    pub fn post(&self, posting: JobPosting) -> Result<Job, ServiceError> {
        self.require_user(posting.posted_by)?;
        let job = self.jobs.insert_job(posting, Utc::now())?;
        info!(job_id = %job.id, poster = %job.posted_by, title = %job.title, "job posted");
        Ok(job)
    }

    pub fn list(&self) -> Result<Vec<Job>, ServiceError> {
        Ok(self.jobs.list_jobs()?)
    }

    pub fn get(&self, id: JobId) -> Result<Job, ServiceError> {
        self.jobs
            .fetch_job(id)?
            .ok_or_else(|| ServiceError::not_found("Job does not exist"))
    }

    pub fn list_by_poster(&self, poster: UserId) -> Result<Vec<Job>, ServiceError> {
        self.require_user(poster)?;
        Ok(self.jobs.jobs_posted_by(poster)?)
    }

    pub fn delete(&self, id: JobId) -> Result<(), ServiceError> {
        self.jobs.delete_job(id).map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::not_found("Job does not exist"),
            other => ServiceError::Repository(other),
        })?;
        info!(job_id = %id, "job deleted");
        Ok(())
    }

    fn require_user(&self, id: UserId) -> Result<(), ServiceError> {
        match self.users.fetch_user(id)? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("User does not exist")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::workflows::jobs::JobType;
    use crate::workflows::users::{Registration, Role};

    fn seeded() -> (JobCatalogue<MemoryStore, MemoryStore>, UserId) {
        let store = Arc::new(MemoryStore::default());
        let bob = store
            .insert_user(
                Registration {
                    name: "Bob".to_string(),
                    email: "b@x.com".to_string(),
                    password: "hunter22".to_string(),
                    role: Role::Employer,
                },
                Utc::now(),
            )
            .expect("insert user");
        (JobCatalogue::new(store.clone(), store), bob.id)
    }

    fn posting(poster: UserId, title: &str) -> JobPosting {
        JobPosting {
            posted_by: poster,
            title: title.to_string(),
            description: "Build APIs".to_string(),
            location: "Remote".to_string(),
            company_name: "Acme".to_string(),
            salary: Some("90k".to_string()),
            job_type: JobType::Remote,
        }
    }

    #[test]
    fn post_requires_existing_poster() {
        let (catalogue, _) = seeded();
        match catalogue.post(posting(UserId(99), "Ghost role")) {
            Err(ServiceError::NotFound(message)) => assert_eq!(message, "User does not exist"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn listings_filter_by_poster_and_keep_identity_order() {
        let (catalogue, bob) = seeded();
        let first = catalogue.post(posting(bob, "Backend")).expect("post");
        let second = catalogue.post(posting(bob, "Frontend")).expect("post");

        let all = catalogue.list().expect("list");
        assert_eq!(
            all.iter().map(|job| job.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
        assert_eq!(catalogue.list_by_poster(bob).expect("by poster").len(), 2);
        assert!(matches!(
            catalogue.list_by_poster(UserId(7)),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_job_and_reports_missing() {
        let (catalogue, bob) = seeded();
        let job = catalogue.post(posting(bob, "Backend")).expect("post");

        catalogue.delete(job.id).expect("delete");
        assert!(matches!(catalogue.get(job.id), Err(ServiceError::NotFound(_))));
        assert!(matches!(catalogue.delete(job.id), Err(ServiceError::NotFound(_))));
    }
}
