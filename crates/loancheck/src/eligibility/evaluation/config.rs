/// Named thresholds read by the eligibility rules.
///
/// There is deliberately no constructor besides [`standard`]: the thresholds
/// are fixed policy, and the struct exists so the rules read named fields
/// rather than bare numbers. The rule reason strings quote the standard
/// values.
///
/// [`standard`]: EvaluationConfig::standard
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EvaluationConfig {
    pub(crate) minimum_age: i64,
    pub(crate) minimum_credit_score: i64,
    pub(crate) minimum_monthly_salary: f64,
    pub(crate) max_emi_share_of_salary: f64,
    pub(crate) disposable_income_multiplier: f64,
}

impl EvaluationConfig {
    pub(crate) fn standard() -> Self {
        Self {
            minimum_age: 21,
            minimum_credit_score: 650,
            minimum_monthly_salary: 20_000.0,
            max_emi_share_of_salary: 0.5,
            disposable_income_multiplier: 20.0,
        }
    }
}
