//! Transportation allowance calculation.
//!
//! Office workers receive the full allowance, remote workers none, and
//! hybrid workers half.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::models::{AuditStep, Employee, SlipComponent, WorkPlatform};

/// The result of calculating the transportation allowance.
#[derive(Debug, Clone)]
pub struct TransportationAllowanceResult {
    /// The allowance amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the transportation allowance from the employee's work platform.
///
/// # Examples
///
/// ```
/// use salary_slip::calculation::calculate_transportation_allowance;
/// use salary_slip::config::PolicyConstants;
/// use salary_slip::models::{Employee, WorkPlatform};
///
/// let constants = PolicyConstants::default();
/// let employee = Employee { work_platform: WorkPlatform::Hybrid, ..Employee::default() };
///
/// let result = calculate_transportation_allowance(&employee, &constants, 1);
/// assert_eq!(result.amount, constants.transportation_allowance_amount / rust_decimal::Decimal::TWO);
/// ```
pub fn calculate_transportation_allowance(
    employee: &Employee,
    constants: &PolicyConstants,
    step_number: u32,
) -> TransportationAllowanceResult {
    let full = constants.transportation_allowance_amount;

    let (amount, platform, reasoning) = match employee.work_platform {
        WorkPlatform::Office => (
            full,
            "office",
            format!("Office worker receives the full allowance of ${}", full.normalize()),
        ),
        WorkPlatform::Remote => (
            Decimal::ZERO,
            "remote",
            "Remote worker receives no transportation allowance".to_string(),
        ),
        WorkPlatform::Hybrid => {
            let half = full / Decimal::TWO;
            (
                half,
                "hybrid",
                format!(
                    "Hybrid worker receives half the allowance: ${} / 2 = ${}",
                    full.normalize(),
                    half.normalize()
                ),
            )
        }
    };

    let component = SlipComponent::TransportationAllowance;
    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "work_platform": platform,
            "allowance_amount": full.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    TransportationAllowanceResult { amount, audit_step }
}
