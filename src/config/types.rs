//! Configuration types for the salary policy.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files in a policy directory, and the flat [`PolicyConstants`] table
//! the calculation rules read from.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Allowance amounts as written in `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceRates {
    /// Transportation allowance paid to office workers.
    pub transportation: Decimal,
    /// Flat danger pay amount.
    pub danger_pay: Decimal,
    /// Spouse allowance amount.
    pub spouse: Decimal,
    /// Allowance per dependant.
    pub dependency_per_child: Decimal,
    /// Flat amount paid once the dependant count exceeds `max_dependants`.
    pub dependency_max: Decimal,
    /// Largest dependant count paid per child.
    pub max_dependants: u32,
}

/// Pension settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionConfig {
    /// Share of basic salary withheld for the pension plan.
    pub rate: Decimal,
}

/// Tiered tax on basic salary.
///
/// A single rate applies to the whole basic salary, chosen by the tier the
/// salary falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TaxPolicy {
    /// Salaries at or above this use `medium_rate`.
    pub low_threshold: Decimal,
    /// Salaries at or above this use `high_rate`.
    pub medium_threshold: Decimal,
    /// Rate below `low_threshold`.
    pub low_rate: Decimal,
    /// Rate from `low_threshold` up to `medium_threshold`.
    pub medium_rate: Decimal,
    /// Rate from `medium_threshold` upwards.
    pub high_rate: Decimal,
}

impl TaxPolicy {
    /// Returns the rate for a given basic salary.
    pub fn rate_for(&self, basic_salary: Decimal) -> Decimal {
        if basic_salary >= self.medium_threshold {
            self.high_rate
        } else if basic_salary >= self.low_threshold {
            self.medium_rate
        } else {
            self.low_rate
        }
    }
}

/// The `policy.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Allowance amounts.
    pub allowances: AllowanceRates,
    /// Pension settings.
    pub pension: PensionConfig,
    /// Optional tax tiers. Absent means no tax is withheld.
    #[serde(default)]
    pub tax: Option<TaxPolicy>,
}

/// The `zones.yaml` file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZonesFile {
    /// Duty stations classified as danger zones.
    #[serde(default)]
    pub danger_zones: Vec<String>,
}

/// The immutable policy table every rule reads from.
///
/// # Example
///
/// ```
/// use salary_slip::config::PolicyConstants;
/// use rust_decimal_macros::dec;
///
/// let constants = PolicyConstants::default();
/// assert_eq!(constants.max_dependants_factor, 5);
/// assert_eq!(constants.max_dependency_allowance_amount, dec!(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConstants {
    /// Transportation allowance for office workers.
    pub transportation_allowance_amount: Decimal,
    /// Flat danger pay amount.
    pub danger_pay_amount: Decimal,
    /// Spouse allowance amount.
    pub spouse_allowance_amount: Decimal,
    /// Allowance per dependant.
    pub dependency_allowance_per_child_amount: Decimal,
    /// Flat dependency allowance once the cap is exceeded.
    pub max_dependency_allowance_amount: Decimal,
    /// Largest dependant count paid per child.
    pub max_dependants_factor: u32,
    /// Share of basic salary withheld for the pension plan.
    pub pension_rate: Decimal,
    /// Tax tiers, if the organisation has defined any.
    pub tax: Option<TaxPolicy>,
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            transportation_allowance_amount: Decimal::new(100, 0),
            danger_pay_amount: Decimal::new(250, 0),
            spouse_allowance_amount: Decimal::new(150, 0),
            dependency_allowance_per_child_amount: Decimal::new(40, 0),
            max_dependency_allowance_amount: Decimal::new(200, 0),
            max_dependants_factor: 5,
            pension_rate: Decimal::new(5, 2),
            tax: None,
        }
    }
}

impl From<&PolicyFile> for PolicyConstants {
    fn from(file: &PolicyFile) -> Self {
        Self {
            transportation_allowance_amount: file.allowances.transportation,
            danger_pay_amount: file.allowances.danger_pay,
            spouse_allowance_amount: file.allowances.spouse,
            dependency_allowance_per_child_amount: file.allowances.dependency_per_child,
            max_dependency_allowance_amount: file.allowances.dependency_max,
            max_dependants_factor: file.allowances.max_dependants,
            pension_rate: file.pension.rate,
            tax: file.tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tiers() -> TaxPolicy {
        TaxPolicy {
            low_threshold: dec!(1000),
            medium_threshold: dec!(5000),
            low_rate: dec!(0.05),
            medium_rate: dec!(0.10),
            high_rate: dec!(0.20),
        }
    }

    #[test]
    fn test_rate_below_low_threshold() {
        assert_eq!(tiers().rate_for(dec!(999.99)), dec!(0.05));
    }

    #[test]
    fn test_rate_at_low_threshold_uses_medium() {
        assert_eq!(tiers().rate_for(dec!(1000)), dec!(0.10));
    }

    #[test]
    fn test_rate_at_medium_threshold_uses_high() {
        assert_eq!(tiers().rate_for(dec!(5000)), dec!(0.20));
        assert_eq!(tiers().rate_for(dec!(12000)), dec!(0.20));
    }

    #[test]
    fn test_default_constants_cap_matches_per_child_times_factor() {
        let c = PolicyConstants::default();
        assert_eq!(
            c.dependency_allowance_per_child_amount * Decimal::from(c.max_dependants_factor),
            c.max_dependency_allowance_amount
        );
        assert_eq!(c.pension_rate, dec!(0.05));
        assert!(c.tax.is_none());
    }

    #[test]
    fn test_deserialize_policy_file_without_tax() {
        let yaml = r#"
policy:
  name: Test Policy
  version: "2026-01-01"
allowances:
  transportation: "100"
  danger_pay: "250"
  spouse: "150"
  dependency_per_child: "40"
  dependency_max: "200"
  max_dependants: 5
pension:
  rate: "0.05"
"#;
        let file: PolicyFile = serde_yaml::from_str(yaml).unwrap();
        let constants = PolicyConstants::from(&file);
        assert_eq!(constants, PolicyConstants::default());
    }

    #[test]
    fn test_deserialize_policy_file_with_tax() {
        let yaml = r#"
policy:
  name: Taxed Policy
  version: "2026-01-01"
allowances:
  transportation: "100"
  danger_pay: "250"
  spouse: "150"
  dependency_per_child: "40"
  dependency_max: "200"
  max_dependants: 5
pension:
  rate: "0.05"
tax:
  low_threshold: "1000"
  medium_threshold: "5000"
  low_rate: "0.05"
  medium_rate: "0.10"
  high_rate: "0.20"
"#;
        let file: PolicyFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.tax, Some(tiers()));
    }
}
