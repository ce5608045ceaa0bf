use crate::infra::{demo_seeker, seed_demo_data, BoardServices};
use chrono::Local;
use clap::Args;
use job_board::error::{AppError, ServiceError};
use job_board::workflows::applications::{ApplicationRequest, ApplicationStatus};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Status the reviewer assigns at the end of the demo (APPLIED, SHORTLISTED, REJECTED).
    #[arg(long, value_parser = parse_status)]
    pub(crate) review_status: Option<ApplicationStatus>,
    /// Stop after the duplicate-application check.
    #[arg(long)]
    pub(crate) skip_review: bool,
}

pub(crate) fn parse_status(raw: &str) -> Result<ApplicationStatus, String> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "APPLIED" => Ok(ApplicationStatus::Applied),
        "SHORTLISTED" => Ok(ApplicationStatus::Shortlisted),
        "REJECTED" => Ok(ApplicationStatus::Rejected),
        other => Err(format!(
            "unknown status '{other}' (expected APPLIED, SHORTLISTED or REJECTED)"
        )),
    }
}

fn outcome<T>(result: &Result<T, ServiceError>) -> String {
    match result {
        Ok(_) => "ok".to_string(),
        Err(err) => format!("{} ({})", err.status_code(), err),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        review_status,
        skip_review,
    } = args;

    println!("Job board demo (in-memory store)");
    let services = BoardServices::in_memory();
    let seed = seed_demo_data(&services)?;
    println!(
        "- Registered {} <{}> as {} and {} <{}> as {}",
        seed.employer.name,
        seed.employer.email,
        seed.employer.role.label(),
        seed.seeker.name,
        seed.seeker.email,
        seed.seeker.role.label()
    );
    println!(
        "- {} posted job {} \"{}\" at {}",
        seed.employer.name, seed.job.id, seed.job.title, seed.job.company_name
    );

    let duplicate = services.directory.register(demo_seeker());
    println!("- Second signup for {}: {}", seed.seeker.email, outcome(&duplicate));

    let seeker = demo_seeker();
    let login = services
        .directory
        .authenticate(&seeker.email, &seeker.password);
    println!("- Login as {}: {}", seeker.email, outcome(&login));
    let bad_login = services.directory.authenticate(&seeker.email, "not-it");
    println!("- Login with wrong password: {}", outcome(&bad_login));

    let own = services.workflow.apply(ApplicationRequest {
        job_id: seed.job.id,
        user_id: seed.employer.id,
    });
    println!("- {} applies to own posting: {}", seed.employer.name, outcome(&own));

    let request = ApplicationRequest {
        job_id: seed.job.id,
        user_id: seed.seeker.id,
    };
    let receipt = services.workflow.apply(request)?;
    println!(
        "- {}: application {} filed {}",
        receipt.message(),
        receipt.application.id,
        receipt
            .application
            .applied_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    let again = services.workflow.apply(request);
    println!("- Applying again: {}", outcome(&again));

    if skip_review {
        return Ok(());
    }

    let status = review_status.unwrap_or(ApplicationStatus::Shortlisted);
    services
        .workflow
        .update_status(receipt.application.id, status)?;
    println!("\nApplications for job {}:", seed.job.id);
    for view in services.workflow.list_by_job(seed.job.id)? {
        println!(
            "  - #{} {} <{}> -> {}",
            view.id,
            view.user.name,
            view.user.email,
            view.status.label()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_accepts_any_case() {
        assert_eq!(parse_status("rejected"), Ok(ApplicationStatus::Rejected));
        assert_eq!(parse_status(" Shortlisted "), Ok(ApplicationStatus::Shortlisted));
        assert!(parse_status("hired").is_err());
    }

    #[test]
    fn demo_runs_to_completion() {
        let args = DemoArgs {
            review_status: Some(ApplicationStatus::Rejected),
            skip_review: false,
        };
        assert!(run_demo(args).is_ok());
    }
}
