use clap::Args;
use loancheck::eligibility::{EligibilityEvaluator, LoanApplicationRequest};
use loancheck::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Applicant name
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Applicant age in years
    #[arg(long, default_value_t = 0)]
    pub(crate) age: i64,
    /// Bureau credit score
    #[arg(long, default_value_t = 0)]
    pub(crate) credit_score: i64,
    /// Gross monthly salary
    #[arg(long, default_value_t = 0.0)]
    pub(crate) salary: f64,
    /// Existing monthly EMI obligations
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_emi: f64,
    /// Requested loan amount
    #[arg(long, default_value_t = 0.0)]
    pub(crate) amount: f64,
}

/// Evaluate one application through the same engine the HTTP path uses.
///
/// Flags default to the wire sentinels, so omitting them exercises the
/// required-fields rule exactly as an empty request body would.
pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        name,
        age,
        credit_score,
        salary,
        existing_emi,
        amount,
    } = args;

    let application = LoanApplicationRequest {
        name,
        age,
        credit_score,
        salary,
        existing_emi,
        amount,
    }
    .into_application();

    let verdict = EligibilityEvaluator::standard().evaluate(&application);

    println!("Loan eligibility check");
    println!(
        "Applicant: {} | age {} | credit score {}",
        display_name(&application.name),
        application.age,
        application.credit_score
    );
    println!(
        "Monthly salary {:.2} | existing EMI {:.2} | requested amount {:.2}",
        application.monthly_salary, application.existing_emi, application.requested_amount
    );
    println!("Eligible: {}", if verdict.is_eligible { "yes" } else { "no" });
    println!("Reason: {}", verdict.reason);

    Ok(())
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(not provided)"
    } else {
        name
    }
}
