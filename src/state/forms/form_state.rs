//! Form state management and validation

use super::change::{normalize, ChangeEvent, ChangeOutcome, RejectReason};
use super::field::{FieldValue, LoanField};
use crate::scoring::LoanApplication;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Required fields that were still unset at submit time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in all fields before submitting. Missing: {}", labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<LoanField>,
}

fn labels(fields: &[LoanField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every applicant attribute, keyed by field. No key is ever added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanForm {
    values: [FieldValue; LoanField::COUNT],
}

impl LoanForm {
    /// All numbers unset, all choices empty
    pub fn new() -> Self {
        Self {
            values: LoanField::ALL.map(|f| FieldValue::unset(f.kind())),
        }
    }

    pub fn get(&self, field: LoanField) -> &FieldValue {
        &self.values[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LoanField, &FieldValue)> + '_ {
        LoanField::ALL.into_iter().zip(self.values.iter())
    }

    /// Merge a change into the form. Rejected changes leave it untouched.
    pub fn apply_change(&mut self, event: &ChangeEvent) -> ChangeOutcome {
        let Some(field) = LoanField::from_name(&event.name) else {
            return ChangeOutcome::Rejected(RejectReason::UnknownField(event.name.clone()));
        };
        match normalize(field, &event.value) {
            Ok(value) => {
                self.values[field.index()] = value;
                ChangeOutcome::Applied
            }
            Err(reason) => ChangeOutcome::Rejected(reason),
        }
    }

    /// Fields that would block submission, in form order
    pub fn missing_fields(&self) -> Vec<LoanField> {
        self.iter()
            .filter(|(_, value)| value.is_unset())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check every required field and build the request body
    pub fn validate(&self) -> Result<LoanApplication, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let num = |field: LoanField| self.get(field).as_number().unwrap_or_default();
        let text = |field: LoanField| self.get(field).as_text().to_string();

        Ok(LoanApplication {
            no_of_dependents: num(LoanField::NoOfDependents),
            education: text(LoanField::Education),
            self_employed: text(LoanField::SelfEmployed),
            income_annum: num(LoanField::IncomeAnnum),
            loan_amount: num(LoanField::LoanAmount),
            loan_term: num(LoanField::LoanTerm),
            cibil_score: num(LoanField::CibilScore),
            residential_assets_value: num(LoanField::ResidentialAssetsValue),
            commercial_assets_value: num(LoanField::CommercialAssetsValue),
            luxury_assets_value: num(LoanField::LuxuryAssetsValue),
            bank_asset_value: num(LoanField::BankAssetValue),
        })
    }
}

impl Default for LoanForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A form with every field filled in
    pub(crate) fn complete_form() -> LoanForm {
        let mut form = LoanForm::new();
        for (name, value) in [
            ("no_of_dependents", "2"),
            ("education", "Graduate"),
            ("self_employed", "No"),
            ("income_annum", "9600000"),
            ("loan_amount", "29900000"),
            ("loan_term", "12"),
            ("cibil_score", "778"),
            ("residential_assets_value", "2400000"),
            ("commercial_assets_value", "17600000"),
            ("luxury_assets_value", "22700000"),
            ("bank_asset_value", "8000000"),
        ] {
            assert!(form.apply_change(&ChangeEvent::new(name, value)).is_applied());
        }
        form
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_all_unset() {
            let form = LoanForm::new();
            for (field, value) in form.iter() {
                assert!(value.is_unset(), "{} should start unset", field.name());
                match field.kind() {
                    crate::state::forms::field::FieldKind::Numeric => {
                        assert_eq!(value, &FieldValue::Number(None))
                    }
                    crate::state::forms::field::FieldKind::Categorical => {
                        assert_eq!(value, &FieldValue::Text(String::new()))
                    }
                }
            }
        }

        #[test]
        fn test_every_field_present() {
            assert_eq!(LoanForm::new().iter().count(), LoanField::COUNT);
        }

        #[test]
        fn test_default_equals_new() {
            assert_eq!(LoanForm::default(), LoanForm::new());
        }
    }

    mod apply_change {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_negative_leaves_every_numeric_unchanged() {
            let mut form = complete_form();
            for field in LoanField::ALL.into_iter().filter(|f| f.is_numeric()) {
                let before = form.get(field).clone();
                let outcome = form.apply_change(&ChangeEvent::new(field.name(), "-1"));
                assert_eq!(outcome, ChangeOutcome::Rejected(RejectReason::Negative));
                assert_eq!(form.get(field), &before);
            }

            let mut empty = LoanForm::new();
            empty.apply_change(&ChangeEvent::new("loan_amount", "-250"));
            assert_eq!(empty.get(LoanField::LoanAmount), &FieldValue::Number(None));
        }

        #[test]
        fn test_empty_string_clears_every_numeric() {
            let mut form = complete_form();
            for field in LoanField::ALL.into_iter().filter(|f| f.is_numeric()) {
                assert!(form
                    .apply_change(&ChangeEvent::new(field.name(), ""))
                    .is_applied());
                assert_eq!(form.get(field), &FieldValue::Number(None));
                assert_eq!(form.get(field).display_value(), "");
            }
        }

        #[test]
        fn test_zero_is_stored() {
            let mut form = LoanForm::new();
            form.apply_change(&ChangeEvent::new("no_of_dependents", "0"));
            assert_eq!(
                form.get(LoanField::NoOfDependents),
                &FieldValue::Number(Some(0.0))
            );
        }

        #[test]
        fn test_categorical_stored_verbatim() {
            let mut form = LoanForm::new();
            form.apply_change(&ChangeEvent::new("self_employed", "Yes"));
            assert_eq!(form.get(LoanField::SelfEmployed).as_text(), "Yes");
        }

        #[test]
        fn test_unknown_field_rejected() {
            let mut form = LoanForm::new();
            let outcome = form.apply_change(&ChangeEvent::new("loan_id", "7"));
            assert_eq!(
                outcome,
                ChangeOutcome::Rejected(RejectReason::UnknownField("loan_id".to_string()))
            );
            assert_eq!(form, LoanForm::new());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_lists_every_field() {
            let err = LoanForm::new().validate().unwrap_err();
            assert_eq!(err.missing, LoanField::ALL.to_vec());
        }

        #[test]
        fn test_missing_fields_reported_in_order() {
            let mut form = complete_form();
            form.apply_change(&ChangeEvent::new("loan_term", ""));
            form.apply_change(&ChangeEvent::new("education", ""));
            let err = form.validate().unwrap_err();
            assert_eq!(err.missing, vec![LoanField::Education, LoanField::LoanTerm]);
            assert!(err.to_string().contains("Education, Loan Term"));
        }

        #[test]
        fn test_zero_values_are_valid() {
            let mut form = complete_form();
            form.apply_change(&ChangeEvent::new("no_of_dependents", "0"));
            form.apply_change(&ChangeEvent::new("bank_asset_value", "0"));
            assert!(form.validate().is_ok());
        }

        #[test]
        fn test_complete_form_serializes() {
            let application = complete_form().validate().unwrap();
            assert_eq!(
                application,
                LoanApplication {
                    no_of_dependents: 2.0,
                    education: "Graduate".to_string(),
                    self_employed: "No".to_string(),
                    income_annum: 9_600_000.0,
                    loan_amount: 29_900_000.0,
                    loan_term: 12.0,
                    cibil_score: 778.0,
                    residential_assets_value: 2_400_000.0,
                    commercial_assets_value: 17_600_000.0,
                    luxury_assets_value: 22_700_000.0,
                    bank_asset_value: 8_000_000.0,
                }
            );
        }

        #[test]
        fn test_is_complete() {
            assert!(!LoanForm::new().is_complete());
            assert!(complete_form().is_complete());
        }
    }
}
