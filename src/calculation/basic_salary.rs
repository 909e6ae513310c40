//! Basic salary calculation.
//!
//! Basic salary is the daily wage multiplied by the days worked in the
//! period. It is also the base the pension and tax rules apply their rates to.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{AuditStep, Employee, SlipComponent};

/// The result of calculating basic salary, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BasicSalaryResult {
    /// Wage multiplied by working days.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates basic salary as `wage * working_days`.
///
/// No validation is applied to the wage.
///
/// # Errors
///
/// Returns [`PayrollError::OutOfRange`](crate::error::PayrollError::OutOfRange)
/// when the product overflows.
///
/// # Examples
///
/// ```
/// use salary_slip::calculation::calculate_basic_salary;
/// use salary_slip::models::Employee;
/// use rust_decimal_macros::dec;
///
/// let employee = Employee { wage: dec!(500), working_days: 20, ..Employee::default() };
/// let result = calculate_basic_salary(&employee, 1).unwrap();
/// assert_eq!(result.amount, dec!(10000));
/// ```
pub fn calculate_basic_salary(
    employee: &Employee,
    step_number: u32,
) -> PayrollResult<BasicSalaryResult> {
    let amount = employee.basic_salary()?;
    let component = SlipComponent::BasicSalary;

    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "wage": employee.wage.normalize().to_string(),
            "working_days": employee.working_days
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            employee.wage.normalize(),
            employee.working_days,
            amount.normalize()
        ),
    };

    Ok(BasicSalaryResult { amount, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use rust_decimal_macros::dec;

    fn employee(wage: Decimal, working_days: u32) -> Employee {
        Employee {
            wage,
            working_days,
            ..Employee::default()
        }
    }

    #[test]
    fn test_wage_times_working_days() {
        let result = calculate_basic_salary(&employee(dec!(500), 20), 1).unwrap();
        assert_eq!(result.amount, dec!(10000));
    }

    #[test]
    fn test_fractional_wage() {
        let result = calculate_basic_salary(&employee(dec!(123.45), 3), 1).unwrap();
        assert_eq!(result.amount, dec!(370.35));
    }

    #[test]
    fn test_zero_days_is_zero() {
        let result = calculate_basic_salary(&employee(dec!(500), 0), 1).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_records_inputs_and_reasoning() {
        let result = calculate_basic_salary(&employee(dec!(500), 20), 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "basic_salary");
        assert_eq!(result.audit_step.input["wage"].as_str().unwrap(), "500");
        assert_eq!(result.audit_step.input["working_days"].as_u64().unwrap(), 20);
        assert_eq!(result.audit_step.output["amount"].as_str().unwrap(), "10000");
        assert_eq!(result.audit_step.reasoning, "$500 x 20 days = $10000");
    }

    #[test]
    fn test_overflowing_wage_is_rejected() {
        let wage = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let result = calculate_basic_salary(&employee(wage, 2), 1);

        assert!(matches!(
            result,
            Err(PayrollError::OutOfRange { ref field, .. }) if field == "wage"
        ));
    }
}
