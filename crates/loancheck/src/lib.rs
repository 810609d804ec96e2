//! Loan eligibility decision service.
//!
//! The crate pairs a pure, total rule evaluator with the HTTP intake that
//! feeds it: [`eligibility`] owns the domain record, the ordered underwriting
//! rules, and the router for the check endpoint, while [`config`],
//! [`telemetry`], and [`error`] carry the service scaffolding used by the
//! `loancheck-api` binary.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
