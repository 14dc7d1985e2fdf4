//! Scoring service client module for HTTP communication

mod client;
mod models;
mod traits;

pub use client::ScoringClient;
pub use models::{LoanApplication, PredictionResponse, RiskDriver, RiskEffect};
pub use traits::ScoringClientTrait;

#[cfg(test)]
pub use traits::MockScoringClientTrait;

/// Default scoring service address
pub const DEFAULT_SCORING_URL: &str = "http://127.0.0.1:8000";

/// Message used when a failed response carries nothing readable
pub const GENERIC_FAILURE_MESSAGE: &str = "The scoring service could not process the request";

/// Error types for scoring operations
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("Could not reach the scoring service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Scoring service returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response from scoring service: {0}")]
    Protocol(String),

    #[error("The scoring request ended before a response arrived")]
    Interrupted,
}

impl ScoringError {
    /// Whether the service itself was unreachable
    pub fn is_transport(&self) -> bool {
        matches!(self, ScoringError::Transport(_))
    }
}
