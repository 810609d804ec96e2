use super::super::domain::LoanApplication;
use super::config::EvaluationConfig;

/// Identifies which rule tripped, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleKind {
    RequiredFields,
    MinimumAge,
    MinimumCreditScore,
    MinimumSalary,
    EmiBurden,
    RepaymentCapacity,
}

/// A single predicate/message pair in the ordered rule sequence.
pub(crate) struct EligibilityRule {
    pub(crate) kind: RuleKind,
    pub(crate) reason: &'static str,
    pub(crate) violated: fn(&LoanApplication, &EvaluationConfig) -> bool,
}

/// The underwriting rules in evaluation order. The first violated entry
/// decides the verdict.
pub(crate) const RULE_SET: &[EligibilityRule] = &[
    EligibilityRule {
        kind: RuleKind::RequiredFields,
        reason: "All fields are required.",
        // Zero doubles as the "not provided" sentinel for age and credit
        // score, so a literal zero value is indistinguishable from an absent
        // field. Preserved as-is; pinned by tests.
        violated: |application, _| {
            application.name.is_empty() || application.age == 0 || application.credit_score == 0
        },
    },
    EligibilityRule {
        kind: RuleKind::MinimumAge,
        reason: "Applicant must be at least 21 years old.",
        violated: |application, config| application.age < config.minimum_age,
    },
    EligibilityRule {
        kind: RuleKind::MinimumCreditScore,
        reason: "Credit score must be at least 650.",
        violated: |application, config| application.credit_score < config.minimum_credit_score,
    },
    EligibilityRule {
        kind: RuleKind::MinimumSalary,
        reason: "Monthly salary must be at least ₹20,000.",
        violated: |application, config| application.monthly_salary < config.minimum_monthly_salary,
    },
    EligibilityRule {
        kind: RuleKind::EmiBurden,
        reason: "Existing EMI exceeds 50% of salary.",
        violated: |application, config| {
            application.existing_emi > config.max_emi_share_of_salary * application.monthly_salary
        },
    },
    EligibilityRule {
        kind: RuleKind::RepaymentCapacity,
        reason: "Loan amount too high compared to your disposable income.",
        violated: |application, config| {
            let disposable = application.monthly_salary - application.existing_emi;
            application.requested_amount > disposable * config.disposable_income_multiplier
        },
    },
];
