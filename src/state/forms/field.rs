//! Form field value objects

/// Whether a field holds a quantity or a closed-set choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Categorical,
}

/// The closed set of applicant attributes collected by the form.
///
/// Declaration order is the on-screen order and the order used when
/// reporting missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanField {
    NoOfDependents,
    Education,
    SelfEmployed,
    IncomeAnnum,
    LoanAmount,
    LoanTerm,
    CibilScore,
    ResidentialAssetsValue,
    CommercialAssetsValue,
    LuxuryAssetsValue,
    BankAssetValue,
}

impl LoanField {
    pub const COUNT: usize = 11;

    pub const ALL: [LoanField; Self::COUNT] = [
        LoanField::NoOfDependents,
        LoanField::Education,
        LoanField::SelfEmployed,
        LoanField::IncomeAnnum,
        LoanField::LoanAmount,
        LoanField::LoanTerm,
        LoanField::CibilScore,
        LoanField::ResidentialAssetsValue,
        LoanField::CommercialAssetsValue,
        LoanField::LuxuryAssetsValue,
        LoanField::BankAssetValue,
    ];

    /// Wire name, also used as the change-event name
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoOfDependents => "no_of_dependents",
            Self::Education => "education",
            Self::SelfEmployed => "self_employed",
            Self::IncomeAnnum => "income_annum",
            Self::LoanAmount => "loan_amount",
            Self::LoanTerm => "loan_term",
            Self::CibilScore => "cibil_score",
            Self::ResidentialAssetsValue => "residential_assets_value",
            Self::CommercialAssetsValue => "commercial_assets_value",
            Self::LuxuryAssetsValue => "luxury_assets_value",
            Self::BankAssetValue => "bank_asset_value",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Education | Self::SelfEmployed => FieldKind::Categorical,
            _ => FieldKind::Numeric,
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self.kind(), FieldKind::Numeric)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoOfDependents => "Number of Dependents",
            Self::Education => "Education",
            Self::SelfEmployed => "Self Employed",
            Self::IncomeAnnum => "Annual Income",
            Self::LoanAmount => "Loan Amount",
            Self::LoanTerm => "Loan Term (years)",
            Self::CibilScore => "CIBIL Score",
            Self::ResidentialAssetsValue => "Residential Assets",
            Self::CommercialAssetsValue => "Commercial Assets",
            Self::LuxuryAssetsValue => "Luxury Assets",
            Self::BankAssetValue => "Bank Assets",
        }
    }

    /// Display-only hint. Nothing here is enforced.
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::CibilScore => Some("300-900"),
            Self::LoanTerm => Some("2-20"),
            Self::NoOfDependents => Some("0-5"),
            _ => None,
        }
    }
}

/// Type-safe field values
///
/// `Number(None)` and `Text("")` are the "not yet provided" sentinels.
/// `Number(Some(0.0))` is a real value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(Option<f64>),
    Text(String),
}

impl FieldValue {
    /// The unset value for a field of the given kind
    pub fn unset(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Numeric => FieldValue::Number(None),
            FieldKind::Categorical => FieldValue::Text(String::new()),
        }
    }

    pub fn is_unset(&self) -> bool {
        match self {
            FieldValue::Number(n) => n.map_or(true, f64::is_nan),
            FieldValue::Text(s) => s.is_empty(),
        }
    }

    /// Get the numeric value (None for text fields)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(_) => None,
        }
    }

    /// Get the text value (returns empty string for numeric fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(_) => "",
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Number(None) => String::new(),
            FieldValue::Number(Some(n)) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Render a number the way a user would type it back in
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_field() {
        for field in LoanField::ALL {
            assert_eq!(LoanField::from_name(field.name()), Some(field));
        }
        assert_eq!(LoanField::from_name("loan_status"), None);
    }

    #[test]
    fn test_only_education_and_self_employed_are_categorical() {
        let categorical: Vec<_> = LoanField::ALL
            .into_iter()
            .filter(|f| !f.is_numeric())
            .collect();
        assert_eq!(
            categorical,
            vec![LoanField::Education, LoanField::SelfEmployed]
        );
    }

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, field) in LoanField::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_unset_number_displays_empty() {
        let value = FieldValue::unset(FieldKind::Numeric);
        assert_eq!(value.display_value(), "");
        assert!(value.is_unset());
    }

    #[test]
    fn test_zero_is_not_unset() {
        let value = FieldValue::Number(Some(0.0));
        assert!(!value.is_unset());
        assert_eq!(value.display_value(), "0");
    }

    #[test]
    fn test_nan_counts_as_unset() {
        assert!(FieldValue::Number(Some(f64::NAN)).is_unset());
    }

    #[test]
    fn test_display_value_keeps_fractions() {
        assert_eq!(FieldValue::Number(Some(2.5)).display_value(), "2.5");
        assert_eq!(FieldValue::Number(Some(5_000_000.0)).display_value(), "5000000");
    }

    #[test]
    fn test_text_accessors() {
        let value = FieldValue::Text("Graduate".to_string());
        assert_eq!(value.as_text(), "Graduate");
        assert_eq!(value.as_number(), None);
        assert_eq!(FieldValue::Number(Some(1.0)).as_text(), "");
    }
}
