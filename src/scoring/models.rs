//! Wire types for the scoring service

use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub no_of_dependents: f64,
    pub education: String,
    pub self_employed: String,
    pub income_annum: f64,
    pub loan_amount: f64,
    pub loan_term: f64,
    pub cibil_score: f64,
    pub residential_assets_value: f64,
    pub commercial_assets_value: f64,
    pub luxury_assets_value: f64,
    pub bank_asset_value: f64,
}

/// Decision returned by the scoring service. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub loan_approval: Option<String>,
    #[serde(default)]
    pub approval_probability: Option<f64>,
    #[serde(default)]
    pub risk_drivers: Option<Vec<RiskDriver>>,
}

/// A feature that materially influenced the decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDriver {
    pub feature: String,
    pub contribution_score: f64,
    pub effect: RiskEffect,
}

/// Direction of a driver's influence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskEffect {
    SupportApproval,
    SupportRejection,
}

impl From<String> for RiskEffect {
    fn from(value: String) -> Self {
        if value == "Support Rejection" {
            RiskEffect::SupportRejection
        } else {
            RiskEffect::SupportApproval
        }
    }
}

impl From<RiskEffect> for String {
    fn from(value: RiskEffect) -> Self {
        match value {
            RiskEffect::SupportApproval => "Support Approval".to_string(),
            RiskEffect::SupportRejection => "Support Rejection".to_string(),
        }
    }
}

/// Error payloads the service (or its framework) may send back
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message in the body, if any
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            match detail {
                serde_json::Value::String(s) if !s.is_empty() => return Some(s.clone()),
                serde_json::Value::Array(items) => {
                    let msgs: Vec<&str> = items
                        .iter()
                        .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                        .collect();
                    if !msgs.is_empty() {
                        return Some(msgs.join("; "));
                    }
                }
                _ => {}
            }
        }
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|s| !s.is_empty())
    }
}
