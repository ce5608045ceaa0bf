use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{Registration, User, UserId};
use super::repository::UserRepository;
use crate::error::ServiceError;
use crate::store::RepositoryError;

/// Email-keyed account registry.
pub struct UserDirectory<R> {
    repository: Arc<R>,
}

impl<R> UserDirectory<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Check a login attempt. Succeeds without a payload.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        let user = self
            .repository
            .find_user_by_email(email)?
            .ok_or_else(|| ServiceError::not_found("Unregistered user"))?;

        if !user.password_matches(password) {
            warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(ServiceError::invalid_credential("Incorrect password"));
        }

        info!(user_id = %user.id, "login accepted");
        Ok(())
    }

    /// Create an account, rejecting an email that is already registered.
    pub fn register(&self, registration: Registration) -> Result<User, ServiceError> {
        if self
            .repository
            .find_user_by_email(&registration.email)?
            .is_some()
        {
            return Err(ServiceError::conflict("User already present, please login"));
        }

        let user = self
            .repository
            .insert_user(registration, Utc::now())
            .map_err(|err| match err {
                RepositoryError::Conflict(_) => {
                    ServiceError::conflict("User already present, please login")
                }
                other => ServiceError::Repository(other),
            })?;

        info!(user_id = %user.id, role = user.role.label(), "user registered");
        Ok(user)
    }

    pub fn get(&self, id: UserId) -> Result<User, ServiceError> {
        self.repository
            .fetch_user(id)?
            .ok_or_else(|| ServiceError::not_found("User does not exist"))
    }
}
