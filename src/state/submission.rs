//! Submission lifecycle and the decision view-model

use crate::scoring::{PredictionResponse, RiskEffect};
use chrono::{DateTime, Local};

/// Most drivers shown in the result panel
pub const MAX_DRIVERS: usize = 3;

/// A decision received from the scoring service
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub response: PredictionResponse,
    pub decided_at: DateTime<Local>,
}

impl Decision {
    pub fn new(response: PredictionResponse) -> Self {
        Self {
            response,
            decided_at: Local::now(),
        }
    }

    pub fn view(&self) -> ResultView {
        ResultView::from_response(&self.response)
    }
}

/// Where the latest submit attempt stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionResult {
    #[default]
    Idle,
    Loading,
    Success(Decision),
    Failure(String),
}

impl SubmissionResult {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionResult::Loading)
    }
}

/// How a driver should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCategory {
    /// Pushed the decision toward rejection
    Risk,
    /// Pushed the decision toward approval
    Strength,
}

impl DriverCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Strength => "strength",
        }
    }
}

impl From<RiskEffect> for DriverCategory {
    fn from(effect: RiskEffect) -> Self {
        match effect {
            RiskEffect::SupportRejection => DriverCategory::Risk,
            RiskEffect::SupportApproval => DriverCategory::Strength,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverView {
    pub feature: String,
    pub score: f64,
    pub category: DriverCategory,
}

/// Everything the result panel needs, with absent fields already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub approved: bool,
    pub decision_label: String,
    /// `None` hides the probability line
    pub probability_label: Option<String>,
    /// Empty hides the drivers section
    pub drivers: Vec<DriverView>,
}

impl ResultView {
    pub fn from_response(response: &PredictionResponse) -> Self {
        let approved = response.loan_approval.as_deref() == Some("Approved");
        let decision_label = response
            .loan_approval
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let probability_label = response
            .approval_probability
            .filter(|p| p.is_finite())
            .map(|p| format!("{:.0}%", p.clamp(0.0, 1.0) * 100.0));
        let drivers = response
            .risk_drivers
            .iter()
            .flatten()
            .take(MAX_DRIVERS)
            .map(|d| DriverView {
                feature: d.feature.clone(),
                score: d.contribution_score,
                category: d.effect.into(),
            })
            .collect();

        Self {
            approved,
            decision_label,
            probability_label,
            drivers,
        }
    }
}
