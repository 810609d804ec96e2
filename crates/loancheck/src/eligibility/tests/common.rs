use crate::eligibility::domain::LoanApplication;
use crate::eligibility::evaluation::EligibilityEvaluator;

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::standard()
}

/// Application that clears every rule.
pub(super) fn qualifying_application() -> LoanApplication {
    LoanApplication {
        name: "Asha".to_string(),
        age: 30,
        credit_score: 700,
        monthly_salary: 50_000.0,
        existing_emi: 5_000.0,
        requested_amount: 500_000.0,
    }
}

/// The six rejection messages in rule order, plus the acceptance message.
pub(super) const CANNED_REASONS: &[&str] = &[
    "All fields are required.",
    "Applicant must be at least 21 years old.",
    "Credit score must be at least 650.",
    "Monthly salary must be at least ₹20,000.",
    "Existing EMI exceeds 50% of salary.",
    "Loan amount too high compared to your disposable income.",
    "Congratulations! You are eligible for the loan.",
];
