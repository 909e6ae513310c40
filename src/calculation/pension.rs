//! Pension contribution calculation.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Employee, SlipComponent};

/// The result of calculating the pension contribution.
#[derive(Debug, Clone)]
pub struct PensionResult {
    /// The contribution withheld.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Withholds `pension_rate * wage * working_days` for plan members, zero otherwise.
///
/// # Errors
///
/// Returns [`PayrollError::OutOfRange`] when the basic salary overflows.
///
/// # Examples
///
/// ```
/// use salary_slip::calculation::calculate_pension;
/// use salary_slip::config::PolicyConstants;
/// use salary_slip::models::Employee;
/// use rust_decimal_macros::dec;
///
/// let constants = PolicyConstants::default();
/// let employee = Employee {
///     wage: dec!(100),
///     working_days: 10,
///     has_pension_plan: true,
///     ..Employee::default()
/// };
/// assert_eq!(calculate_pension(&employee, &constants, 1).unwrap().amount, dec!(50));
/// ```
pub fn calculate_pension(
    employee: &Employee,
    constants: &PolicyConstants,
    step_number: u32,
) -> PayrollResult<PensionResult> {
    let component = SlipComponent::Pension;

    if !employee.has_pension_plan {
        let audit_step = AuditStep {
            step_number,
            rule_id: component.rule_id().to_string(),
            rule_name: component.display_name().to_string(),
            input: serde_json::json!({
                "has_pension_plan": false
            }),
            output: serde_json::json!({
                "amount": "0"
            }),
            reasoning: "Employee has no pension plan - nothing withheld".to_string(),
        };
        return Ok(PensionResult {
            amount: Decimal::ZERO,
            audit_step,
        });
    }

    let basic_salary = employee.basic_salary()?;
    let rate = constants.pension_rate;
    let amount = rate
        .checked_mul(basic_salary)
        .ok_or_else(|| PayrollError::overflow("pension_rate", rate))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "has_pension_plan": true,
            "basic_salary": basic_salary.normalize().to_string(),
            "pension_rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x ${} = ${}",
            rate.normalize(),
            basic_salary.normalize(),
            amount.normalize()
        ),
    };

    Ok(PensionResult { amount, audit_step })
}
