use chrono::{DateTime, Utc};

use super::domain::{Registration, User, UserId};
use crate::store::RepositoryError;

/// User table access. Implementations must reject a second row for the same email with
/// [`RepositoryError::Conflict`].
pub trait UserRepository: Send + Sync {
    fn insert_user(
        &self,
        registration: Registration,
        created_at: DateTime<Utc>,
    ) -> Result<User, RepositoryError>;
    fn fetch_user(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
