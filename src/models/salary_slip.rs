//! Salary slip models.
//!
//! This module contains the [`SalarySlip`] type and the structures that make
//! it up: earnings and deduction lines, totals, and the audit trace recording
//! how every amount was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A component of the salary slip.
///
/// # Example
///
/// ```
/// use salary_slip::models::SlipComponent;
///
/// assert_eq!(SlipComponent::DangerPay.rule_id(), "danger_pay");
/// assert!(SlipComponent::Pension.is_deduction());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipComponent {
    /// Wage multiplied by working days.
    BasicSalary,
    /// Allowance for commuting, by work platform.
    TransportationAllowance,
    /// Hazard pay for flagged employees or danger zone postings.
    DangerPay,
    /// Allowance for married employees.
    SpouseAllowance,
    /// Allowance per dependant, capped.
    DependencyAllowance,
    /// Pension plan contribution.
    Pension,
    /// Income tax.
    Tax,
}

impl SlipComponent {
    /// Every component in the order it appears on a slip.
    pub const ALL: [SlipComponent; 7] = [
        SlipComponent::BasicSalary,
        SlipComponent::TransportationAllowance,
        SlipComponent::DangerPay,
        SlipComponent::SpouseAllowance,
        SlipComponent::DependencyAllowance,
        SlipComponent::Pension,
        SlipComponent::Tax,
    ];

    /// Stable identifier used in audit steps.
    pub fn rule_id(&self) -> &'static str {
        match self {
            SlipComponent::BasicSalary => "basic_salary",
            SlipComponent::TransportationAllowance => "transportation_allowance",
            SlipComponent::DangerPay => "danger_pay",
            SlipComponent::SpouseAllowance => "spouse_allowance",
            SlipComponent::DependencyAllowance => "dependency_allowance",
            SlipComponent::Pension => "pension",
            SlipComponent::Tax => "tax",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SlipComponent::BasicSalary => "Basic Salary",
            SlipComponent::TransportationAllowance => "Transportation Allowance",
            SlipComponent::DangerPay => "Danger Pay",
            SlipComponent::SpouseAllowance => "Spouse Allowance",
            SlipComponent::DependencyAllowance => "Dependency Allowance",
            SlipComponent::Pension => "Pension",
            SlipComponent::Tax => "Tax",
        }
    }

    /// Looks a component up by its URL slug (e.g. `danger-pay`).
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.rule_id().replace('_', "-") == slug)
    }

    /// Returns true for components withheld from gross pay.
    pub fn is_deduction(&self) -> bool {
        matches!(self, SlipComponent::Pension | SlipComponent::Tax)
    }
}

/// A single line on the salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipLine {
    /// Which component this line represents.
    pub component: SlipComponent,
    /// Description shown on the slip.
    pub description: String,
    /// The amount for this line.
    pub amount: Decimal,
}

/// Aggregated totals for a salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipTotals {
    /// Wage multiplied by working days.
    pub basic_salary: Decimal,
    /// Sum of all allowances (earnings other than basic salary).
    pub allowances_total: Decimal,
    /// Basic salary plus allowances.
    pub gross_pay: Decimal,
    /// Sum of all deductions.
    pub deductions_total: Decimal,
    /// Gross pay less deductions.
    pub net_pay: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete salary slip for one employee and pay period.
///
/// # Example
///
/// ```
/// use salary_slip::models::{AuditTrace, SalarySlip, SlipTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let slip = SalarySlip {
///     slip_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     earnings: vec![],
///     deductions: vec![],
///     totals: SlipTotals {
///         basic_salary: Decimal::ZERO,
///         allowances_total: Decimal::ZERO,
///         gross_pay: Decimal::ZERO,
///         deductions_total: Decimal::ZERO,
///         net_pay: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
/// };
/// assert!(slip.line(salary_slip::models::SlipComponent::Tax).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// Unique identifier for this slip.
    pub slip_id: Uuid,
    /// When the slip was calculated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the slip.
    pub engine_version: String,
    /// Basic salary and allowances.
    pub earnings: Vec<SlipLine>,
    /// Pension and tax.
    pub deductions: Vec<SlipLine>,
    /// Summary totals.
    pub totals: SlipTotals,
    /// How every amount was reached.
    pub audit_trace: AuditTrace,
}

impl SalarySlip {
    /// Finds the line for a component among earnings and deductions.
    pub fn line(&self, component: SlipComponent) -> Option<&SlipLine> {
        self.earnings
            .iter()
            .chain(self.deductions.iter())
            .find(|l| l.component == component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_component_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SlipComponent::TransportationAllowance).unwrap(),
            "\"transportation_allowance\""
        );
    }

    #[test]
    fn test_rule_id_matches_serialized_name() {
        for component in SlipComponent::ALL {
            let json = serde_json::to_string(&component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.rule_id()));
        }
    }

    #[test]
    fn test_from_slug_round_trips_every_component() {
        for component in SlipComponent::ALL {
            let slug = component.rule_id().replace('_', "-");
            assert_eq!(SlipComponent::from_slug(&slug), Some(component));
        }
    }

    #[test]
    fn test_from_slug_unknown_is_none() {
        assert_eq!(SlipComponent::from_slug("overtime"), None);
        assert_eq!(SlipComponent::from_slug("danger_pay"), None);
    }

    #[test]
    fn test_only_pension_and_tax_are_deductions() {
        let deductions: Vec<_> = SlipComponent::ALL
            .into_iter()
            .filter(SlipComponent::is_deduction)
            .collect();
        assert_eq!(deductions, vec![SlipComponent::Pension, SlipComponent::Tax]);
    }

    #[test]
    fn test_line_searches_earnings_and_deductions() {
        let slip = SalarySlip {
            slip_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            earnings: vec![SlipLine {
                component: SlipComponent::BasicSalary,
                description: "Basic Salary".to_string(),
                amount: dec!(1000),
            }],
            deductions: vec![SlipLine {
                component: SlipComponent::Pension,
                description: "Pension".to_string(),
                amount: dec!(50),
            }],
            totals: SlipTotals {
                basic_salary: dec!(1000),
                allowances_total: Decimal::ZERO,
                gross_pay: dec!(1000),
                deductions_total: dec!(50),
                net_pay: dec!(950),
            },
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 0,
            },
        };

        assert_eq!(
            slip.line(SlipComponent::BasicSalary).unwrap().amount,
            dec!(1000)
        );
        assert_eq!(slip.line(SlipComponent::Pension).unwrap().amount, dec!(50));
        assert!(slip.line(SlipComponent::Tax).is_none());

        let json = serde_json::to_string(&slip).unwrap();
        let back: SalarySlip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slip);
    }
}
