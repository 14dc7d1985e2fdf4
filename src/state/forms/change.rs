//! Change events shared by every input source

use super::field::{FieldKind, FieldValue, LoanField};

/// A normalized `{name, value}` change.
///
/// Both the number inputs and the dropdowns produce this shape, so the form
/// never needs to know which widget an edit came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub name: String,
    pub value: String,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Why an edit was dropped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("negative values are not allowed")]
    Negative,
}

/// Result of applying a change to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    Applied,
    Rejected(RejectReason),
}

impl ChangeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ChangeOutcome::Applied)
    }
}

/// Turn a raw change into the value to store for `field`.
pub fn normalize(field: LoanField, raw: &str) -> Result<FieldValue, RejectReason> {
    match field.kind() {
        FieldKind::Categorical => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Numeric => {
            let trimmed = raw.trim();
            // A lone point is the start of a decimal like ".5"
            if trimmed.is_empty() || trimmed == "." {
                return Ok(FieldValue::Number(None));
            }
            let n: f64 = trimmed
                .parse()
                .map_err(|_| RejectReason::NotANumber(trimmed.to_string()))?;
            if !n.is_finite() {
                return Err(RejectReason::NotANumber(trimmed.to_string()));
            }
            if n < 0.0 {
                return Err(RejectReason::Negative);
            }
            // -0 parses fine but should store as a plain zero
            Ok(FieldValue::Number(Some(n.abs())))
        }
    }
}
