//! Loan service client module

mod client;
mod traits;

pub use client::{LoanApplication, LoanClient, ServiceError, FALLBACK_FAILURE_MESSAGE};
pub use traits::LoanServiceTrait;

#[cfg(test)]
pub use traits::MockLoanServiceTrait;
