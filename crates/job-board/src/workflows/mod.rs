pub mod applications;
pub mod jobs;
pub mod users;

use std::sync::Arc;

use axum::Router;

use applications::{application_router, ApplicationRepository, ApplicationWorkflow};
use jobs::{job_router, JobCatalogue, JobRepository};
use users::{user_router, UserDirectory, UserRepository};

/// Merge the user, job and application routers into one job board surface.
pub fn board_router<A, J, U>(
    directory: Arc<UserDirectory<U>>,
    catalogue: Arc<JobCatalogue<J, U>>,
    workflow: Arc<ApplicationWorkflow<A, J, U>>,
) -> Router
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    user_router(directory)
        .merge(job_router(catalogue))
        .merge(application_router(workflow))
}
