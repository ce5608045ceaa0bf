//! User sign-up and credential checks keyed by email address.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Credentials, Registration, Role, User, UserId, UserView};
pub use repository::UserRepository;
pub use router::user_router;
pub use service::UserDirectory;
