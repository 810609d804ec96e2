mod config;
mod rules;

use config::EvaluationConfig;

use super::domain::{EligibilityVerdict, LoanApplication};
use tracing::debug;

/// Stateless evaluator applying the ordered underwriting rules to an
/// application.
pub struct EligibilityEvaluator {
    config: EvaluationConfig,
}

impl EligibilityEvaluator {
    /// Evaluator carrying the fixed underwriting policy.
    pub fn standard() -> Self {
        Self::new(EvaluationConfig::standard())
    }

    pub(crate) fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Walk the rules in order; the first violation decides the verdict.
    ///
    /// Total over the input domain: every application yields exactly one of
    /// the canned reasons, and evaluating the same record twice yields the
    /// same verdict.
    pub fn evaluate(&self, application: &LoanApplication) -> EligibilityVerdict {
        for rule in rules::RULE_SET {
            if (rule.violated)(application, &self.config) {
                debug!(rule = ?rule.kind, "loan application rejected");
                return EligibilityVerdict::rejected(rule.reason);
            }
        }

        EligibilityVerdict::eligible()
    }
}
