//! Trait abstraction for the scoring client to enable mocking in tests

use super::{LoanApplication, PredictionResponse, ScoringError};
use async_trait::async_trait;

/// Trait for scoring client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringClientTrait: Send + Sync {
    /// Check if the scoring service is reachable
    async fn check_health(&self) -> bool;

    /// Submit an application and return the decision
    async fn predict(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionResponse, ScoringError>;
}
