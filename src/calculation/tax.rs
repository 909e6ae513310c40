//! Income tax calculation.
//!
//! Tax is an organisation-specific policy. Without a configured
//! [`TaxPolicy`](crate::config::TaxPolicy) nothing is withheld. With one,
//! a single tiered rate is applied to the whole basic salary.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Employee, SlipComponent};

/// The result of calculating tax.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The tax withheld.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates tax on basic salary using the configured tiers, if any.
///
/// # Errors
///
/// Returns [`PayrollError::OutOfRange`] when the basic salary overflows.
///
/// # Examples
///
/// ```
/// use salary_slip::calculation::calculate_tax;
/// use salary_slip::config::{PolicyConstants, TaxPolicy};
/// use salary_slip::models::Employee;
/// use rust_decimal_macros::dec;
///
/// let employee = Employee { wage: dec!(300), working_days: 20, ..Employee::default() };
///
/// let untaxed = PolicyConstants::default();
/// assert_eq!(calculate_tax(&employee, &untaxed, 1).unwrap().amount, dec!(0));
///
/// let taxed = PolicyConstants {
///     tax: Some(TaxPolicy {
///         low_threshold: dec!(1000),
///         medium_threshold: dec!(5000),
///         low_rate: dec!(0.05),
///         medium_rate: dec!(0.10),
///         high_rate: dec!(0.20),
///     }),
///     ..PolicyConstants::default()
/// };
/// assert_eq!(calculate_tax(&employee, &taxed, 1).unwrap().amount, dec!(1200));
/// ```
pub fn calculate_tax(
    employee: &Employee,
    constants: &PolicyConstants,
    step_number: u32,
) -> PayrollResult<TaxResult> {
    let component = SlipComponent::Tax;
    let basic_salary = employee.basic_salary()?;

    let Some(policy) = constants.tax else {
        let audit_step = AuditStep {
            step_number,
            rule_id: component.rule_id().to_string(),
            rule_name: component.display_name().to_string(),
            input: serde_json::json!({
                "basic_salary": basic_salary.normalize().to_string(),
                "tax_policy": false
            }),
            output: serde_json::json!({
                "amount": "0"
            }),
            reasoning: "No tax policy configured - nothing withheld".to_string(),
        };
        return Ok(TaxResult {
            amount: Decimal::ZERO,
            audit_step,
        });
    };

    let rate = policy.rate_for(basic_salary);
    let amount = basic_salary
        .checked_mul(rate)
        .ok_or_else(|| PayrollError::overflow("basic_salary", basic_salary))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "tax_policy": true,
            "low_threshold": policy.low_threshold.normalize().to_string(),
            "medium_threshold": policy.medium_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            basic_salary.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    Ok(TaxResult { amount, audit_step })
}
