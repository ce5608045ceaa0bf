//! Request checks run at the HTTP boundary before any service call.

use serde::Serialize;
use validator::{ValidateEmail, ValidateLength};

use crate::error::ServiceError;
use crate::workflows::jobs::JobPosting;
use crate::workflows::users::{Credentials, Registration};

pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// One rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        let present = !value.trim().is_empty();
        if !present {
            self.0.push(FieldViolation::new(field, message));
        }
        present
    }

    fn check(&mut self, holds: bool, field: &'static str, message: &str) {
        if !holds {
            self.0.push(FieldViolation::new(field, message));
        }
    }

    fn finish(self) -> Result<(), ServiceError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self.0))
        }
    }
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), ServiceError> {
    let mut violations = Violations::default();
    if violations.require("email", &credentials.email, "Email cannot be blank") {
        violations.check(
            credentials.email.validate_email(),
            "email",
            "Invalid email, please try again",
        );
    }
    violations.require("password", &credentials.password, "Password cannot be blank");
    violations.finish()
}

pub fn validate_registration(registration: &Registration) -> Result<(), ServiceError> {
    let mut violations = Violations::default();
    violations.require("name", &registration.name, "Name cannot be blank");
    if violations.require("email", &registration.email, "Email cannot be blank") {
        violations.check(
            registration.email.validate_email(),
            "email",
            "Invalid email, please try again",
        );
    }
    violations.check(
        registration
            .password
            .validate_length(Some(MIN_PASSWORD_LENGTH), None, None),
        "password",
        "Password must be at least 6 characters",
    );
    violations.finish()
}

pub fn validate_job_posting(posting: &JobPosting) -> Result<(), ServiceError> {
    let mut violations = Violations::default();
    violations.require("title", &posting.title, "Title cannot be blank");
    violations.require("description", &posting.description, "Description cannot be blank");
    violations.require("location", &posting.location, "Location cannot be blank");
    violations.require("companyName", &posting.company_name, "Company name cannot be blank");
    violations.finish()
}
