//! Payout details: the step payload and the explicit payout method.
//!
//! The step form has four nullable text fields. Bank fields form an
//! all-or-nothing group; the UPI id stands alone; providing nothing defers
//! payout setup.

use courtside_validator::validators::banking::normalize_ifsc;
use courtside_validator::{FieldRules, ValidationError, ValidationErrors, ValidationReport};
use serde::{Deserialize, Serialize};

/// A bank account for settlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_number: String,
    /// Stored uppercase.
    pub ifsc: String,
    pub holder_name: String,
}

/// One well-formed way of receiving payouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PayoutMethod {
    /// Payout setup deferred.
    None,
    Bank(BankAccount),
    Upi { id: String },
}

impl PayoutMethod {
    /// Validates the fields this method carries.
    pub fn validate(&self, rules: &FieldRules) -> ValidationReport {
        match self {
            PayoutMethod::None => ValidationReport::valid(),
            PayoutMethod::Bank(bank) => PayoutDetailsStep::from(bank.clone()).validate(rules),
            PayoutMethod::Upi { id } => {
                let mut report = rules.validate_upi_id(id);
                if id.trim().is_empty() {
                    report.push("UPI ID is required");
                }
                report
            }
        }
    }
}

// ============================================================================
// STEP PAYLOAD
// ============================================================================

/// Step 5 payload, `{bank_account_number, bank_ifsc, bank_account_holder, upi_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDetailsStep {
    #[serde(default)]
    pub bank_account_number: Option<String>,
    #[serde(default)]
    pub bank_ifsc: Option<String>,
    #[serde(default)]
    pub bank_account_holder: Option<String>,
    #[serde(default)]
    pub upi_id: Option<String>,
}

/// Trimmed value, `None` when absent or blank.
fn filled(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl PayoutDetailsStep {
    fn account_number(&self) -> Option<&str> {
        filled(self.bank_account_number.as_ref())
    }

    fn ifsc(&self) -> Option<&str> {
        filled(self.bank_ifsc.as_ref())
    }

    fn holder(&self) -> Option<&str> {
        filled(self.bank_account_holder.as_ref())
    }

    fn upi(&self) -> Option<&str> {
        filled(self.upi_id.as_ref())
    }

    /// Whether any bank field is filled in.
    pub fn has_bank_details(&self) -> bool {
        self.account_number().is_some() || self.ifsc().is_some() || self.holder().is_some()
    }

    /// Validates the step.
    ///
    /// Filling any bank field makes all three mandatory. The UPI id is
    /// checked independently. An empty step is valid.
    pub fn validate(&self, rules: &FieldRules) -> ValidationReport {
        let mut report = ValidationReport::valid();

        if self.has_bank_details() {
            let group = [
                ("bank_account_number", "Account number", self.account_number()),
                ("bank_ifsc", "IFSC code", self.ifsc()),
                ("bank_account_holder", "Account holder name", self.holder()),
            ];
            let mut missing = ValidationErrors::new();
            for (field, label, value) in group {
                if value.is_none() {
                    missing.add(
                        ValidationError::required(field, label)
                            .with_message(format!("{label} is required when adding bank details")),
                    );
                }
            }
            report.merge(missing.into());
            if let Some(number) = self.account_number() {
                report.merge(rules.validate_bank_account_number(number));
            }
            if let Some(ifsc) = self.ifsc() {
                report.merge(rules.validate_ifsc(ifsc));
            }
            if let Some(holder) = self.holder() {
                report.merge(rules.validate_account_holder_name(holder));
            }
        }

        if let Some(upi) = self.upi() {
            report.merge(rules.validate_upi_id(upi));
        }

        report
    }

    /// The payload as sent: trimmed, blanks as `null`, IFSC uppercased.
    ///
    /// ```rust
    /// use courtside_onboarding::PayoutDetailsStep;
    ///
    /// let step = PayoutDetailsStep {
    ///     bank_ifsc: Some(" sbin0001234 ".into()),
    ///     upi_id: Some("  ".into()),
    ///     ..Default::default()
    /// };
    /// let sent = step.normalized();
    /// assert_eq!(sent.bank_ifsc.as_deref(), Some("SBIN0001234"));
    /// assert_eq!(sent.upi_id, None);
    /// ```
    pub fn normalized(&self) -> Self {
        Self {
            bank_account_number: self.account_number().map(str::to_owned),
            bank_ifsc: self.ifsc().map(normalize_ifsc),
            bank_account_holder: self.holder().map(str::to_owned),
            upi_id: self.upi().map(str::to_owned),
        }
    }

    /// Validates, then converts the filled fields into payout methods.
    ///
    /// An empty step resolves to `[PayoutMethod::None]`.
    ///
    /// ```rust
    /// use courtside_onboarding::{PayoutDetailsStep, PayoutMethod};
    /// use courtside_validator::FieldRules;
    ///
    /// let step = PayoutDetailsStep { upi_id: Some("owner@upi".into()), ..Default::default() };
    /// let methods = step.resolve(&FieldRules::default()).unwrap();
    /// assert_eq!(methods, vec![PayoutMethod::Upi { id: "owner@upi".into() }]);
    /// ```
    pub fn resolve(&self, rules: &FieldRules) -> Result<Vec<PayoutMethod>, ValidationReport> {
        let report = self.validate(rules);
        if !report.is_valid {
            return Err(report);
        }

        let mut methods = Vec::new();
        if let (Some(account_number), Some(ifsc), Some(holder_name)) =
            (self.account_number(), self.ifsc(), self.holder())
        {
            methods.push(PayoutMethod::Bank(BankAccount {
                account_number: account_number.to_owned(),
                ifsc: normalize_ifsc(ifsc),
                holder_name: holder_name.to_owned(),
            }));
        }
        if let Some(id) = self.upi() {
            methods.push(PayoutMethod::Upi { id: id.to_owned() });
        }
        if methods.is_empty() {
            methods.push(PayoutMethod::None);
        }
        Ok(methods)
    }

    /// Builds the step payload from payout methods.
    pub fn from_methods<'a>(methods: impl IntoIterator<Item = &'a PayoutMethod>) -> Self {
        let mut step = Self::default();
        for method in methods {
            match method {
                PayoutMethod::None => {}
                PayoutMethod::Bank(bank) => {
                    step.bank_account_number = Some(bank.account_number.clone());
                    step.bank_ifsc = Some(bank.ifsc.clone());
                    step.bank_account_holder = Some(bank.holder_name.clone());
                }
                PayoutMethod::Upi { id } => step.upi_id = Some(id.clone()),
            }
        }
        step
    }
}

impl From<BankAccount> for PayoutDetailsStep {
    fn from(bank: BankAccount) -> Self {
        Self {
            bank_account_number: Some(bank.account_number),
            bank_ifsc: Some(bank.ifsc),
            bank_account_holder: Some(bank.holder_name),
            upi_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules() -> FieldRules {
        FieldRules::default()
    }

    fn bank() -> BankAccount {
        BankAccount {
            account_number: "123456789012".into(),
            ifsc: "sbin0001234".into(),
            holder_name: "Priya Nair".into(),
        }
    }

    #[test]
    fn upi_only_with_blank_bank_fields() {
        let step = PayoutDetailsStep {
            bank_account_number: Some(String::new()),
            bank_ifsc: Some(String::new()),
            bank_account_holder: Some(String::new()),
            upi_id: Some("user@upi".into()),
        };
        assert_eq!(step.validate(&rules()), ValidationReport::valid());
    }

    #[test]
    fn account_number_alone_needs_the_rest() {
        let step = PayoutDetailsStep {
            bank_account_number: Some("123456789012".into()),
            ..Default::default()
        };
        assert_eq!(
            step.validate(&rules()).errors,
            vec![
                "IFSC code is required when adding bank details".to_string(),
                "Account holder name is required when adding bank details".to_string(),
            ]
        );
    }

    #[test]
    fn empty_step_defers_payout() {
        let step = PayoutDetailsStep::default();
        assert!(step.validate(&rules()).is_valid);
        assert_eq!(step.resolve(&rules()).unwrap(), vec![PayoutMethod::None]);
    }

    #[test]
    fn full_bank_group_resolves_with_uppercase_ifsc() {
        let step = PayoutDetailsStep::from(bank());
        let methods = step.resolve(&rules()).unwrap();
        assert_eq!(
            methods,
            vec![PayoutMethod::Bank(BankAccount {
                ifsc: "SBIN0001234".into(),
                ..bank()
            })]
        );
    }

    #[test]
    fn bank_and_upi_together() {
        let mut step = PayoutDetailsStep::from(bank());
        step.upi_id = Some("priya@okaxis".into());
        let methods = step.resolve(&rules()).unwrap();
        assert_eq!(methods.len(), 2);
        assert_eq!(PayoutDetailsStep::from_methods(&methods).upi_id.as_deref(), Some("priya@okaxis"));
    }

    #[test]
    fn invalid_upi_blocks_resolution() {
        let step = PayoutDetailsStep {
            upi_id: Some("not-a-upi".into()),
            ..Default::default()
        };
        assert!(step.resolve(&rules()).is_err());
    }

    #[test]
    fn method_validation() {
        assert!(PayoutMethod::None.validate(&rules()).is_valid);
        assert!(PayoutMethod::Bank(bank()).validate(&rules()).is_valid);
        assert!(!PayoutMethod::Upi { id: String::new() }.validate(&rules()).is_valid);
    }

    #[test]
    fn method_json_is_tagged() {
        let json = serde_json::to_value(PayoutMethod::Upi { id: "a@upi".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "method": "upi", "id": "a@upi" }));
    }
}
