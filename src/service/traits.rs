//! Trait abstraction for the loan service client to enable mocking in tests

use super::client::{LoanApplication, ServiceError};
use async_trait::async_trait;

/// Trait for loan service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanServiceTrait: Send + Sync {
    /// Submit a loan application and return the decision message
    async fn request_loan(&self, application: LoanApplication) -> Result<String, ServiceError>;
}
