use serde::{Deserialize, Serialize};

/// Immutable applicant record evaluated by the rule engine.
///
/// Constructed per request from a [`LoanApplicationRequest`] and dropped once
/// the verdict is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanApplication {
    pub name: String,
    pub age: i64,
    pub credit_score: i64,
    pub monthly_salary: f64,
    pub existing_emi: f64,
    pub requested_amount: f64,
}

/// Eligibility decision plus its human-readable justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityVerdict {
    pub is_eligible: bool,
    pub reason: String,
}

impl EligibilityVerdict {
    /// Canned acceptance message produced when every rule passes.
    pub const APPROVAL_REASON: &'static str = "Congratulations! You are eligible for the loan.";
    /// Canned message for payloads that cannot be parsed at all.
    pub const INVALID_REQUEST_REASON: &'static str = "Invalid request data.";

    pub fn eligible() -> Self {
        Self {
            is_eligible: true,
            reason: Self::APPROVAL_REASON.to_string(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_eligible: false,
            reason: reason.into(),
        }
    }

    pub fn invalid_request() -> Self {
        Self::rejected(Self::INVALID_REQUEST_REASON)
    }
}

/// Wire shape accepted by the eligibility endpoint.
///
/// Every field is optional. Absent fields take the sentinel defaults the
/// required-fields rule keys off: empty name, zero age and credit score, zero
/// amounts. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub credit_score: i64,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub existing_emi: f64,
    #[serde(default)]
    pub amount: f64,
}

impl LoanApplicationRequest {
    /// Build the domain record, mapping the wire names onto the evaluator's.
    pub fn into_application(self) -> LoanApplication {
        LoanApplication {
            name: self.name,
            age: self.age,
            credit_score: self.credit_score,
            monthly_salary: self.salary,
            existing_emi: self.existing_emi,
            requested_amount: self.amount,
        }
    }
}
