//! Spouse allowance calculation.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::models::{AuditStep, Employee, SlipComponent};

/// The result of calculating the spouse allowance.
#[derive(Debug, Clone)]
pub struct SpouseAllowanceResult {
    /// The allowance amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays the flat spouse allowance to married employees.
pub fn calculate_spouse_allowance(
    employee: &Employee,
    constants: &PolicyConstants,
    step_number: u32,
) -> SpouseAllowanceResult {
    let amount = if employee.is_married {
        constants.spouse_allowance_amount
    } else {
        Decimal::ZERO
    };

    let reasoning = if employee.is_married {
        format!("Married employee receives ${}", amount.normalize())
    } else {
        "Employee is not married - no spouse allowance".to_string()
    };

    let component = SlipComponent::SpouseAllowance;
    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "is_married": employee.is_married
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    SpouseAllowanceResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_married_gets_allowance() {
        let constants = PolicyConstants::default();
        let employee = Employee {
            is_married: true,
            ..Employee::default()
        };

        let result = calculate_spouse_allowance(&employee, &constants, 1);
        assert_eq!(result.amount, constants.spouse_allowance_amount);
    }

    #[test]
    fn test_unmarried_gets_nothing() {
        let constants = PolicyConstants::default();
        let result = calculate_spouse_allowance(&Employee::default(), &constants, 1);

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.audit_step.output["amount"].as_str().unwrap(), "0");
    }
}
