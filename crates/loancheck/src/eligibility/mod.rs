//! Loan application intake and eligibility evaluation.
//!
//! The endpoint payload is mapped onto an immutable [`LoanApplication`] and
//! handed to the [`EligibilityEvaluator`], which walks a fixed ordered rule
//! set with first-failure-wins semantics. Evaluation is pure and total: every
//! application yields exactly one verdict with one canned reason, and nothing
//! is persisted between requests.

pub mod domain;
pub(crate) mod evaluation;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{EligibilityVerdict, LoanApplication, LoanApplicationRequest};
pub use evaluation::EligibilityEvaluator;
pub use router::eligibility_router;
