//! Dependency allowance calculation.
//!
//! Each dependant is paid a per-child amount up to the policy's maximum
//! dependant count. Beyond that count the allowance is a flat maximum
//! rather than a per-child amount.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConstants;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Employee, SlipComponent};

/// The result of calculating the dependency allowance.
#[derive(Debug, Clone)]
pub struct DependencyAllowanceResult {
    /// The allowance amount.
    pub amount: Decimal,
    /// Whether the flat maximum was paid instead of a per-child amount.
    pub cap_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the dependency allowance.
///
/// # Errors
///
/// Returns [`PayrollError::OutOfRange`] when `total_dependencies` is negative.
///
/// # Examples
///
/// ```
/// use salary_slip::calculation::calculate_dependency_allowance;
/// use salary_slip::config::PolicyConstants;
/// use salary_slip::models::Employee;
///
/// let constants = PolicyConstants::default();
/// let employee = Employee { total_dependencies: 6, ..Employee::default() };
///
/// let result = calculate_dependency_allowance(&employee, &constants, 1).unwrap();
/// assert!(result.cap_applied);
/// assert_eq!(result.amount, constants.max_dependency_allowance_amount);
/// ```
pub fn calculate_dependency_allowance(
    employee: &Employee,
    constants: &PolicyConstants,
    step_number: u32,
) -> PayrollResult<DependencyAllowanceResult> {
    let dependants = employee.total_dependencies;
    if dependants < 0 {
        return Err(PayrollError::OutOfRange {
            field: "total_dependencies".to_string(),
            value: dependants.to_string(),
            message: "dependant count must not be negative".to_string(),
        });
    }

    let per_child = constants.dependency_allowance_per_child_amount;
    let max_factor = constants.max_dependants_factor;
    let cap_applied = dependants.unsigned_abs() > max_factor;

    let (amount, reasoning) = if cap_applied {
        debug!(
            dependants,
            max_dependants = max_factor,
            "Dependant count above maximum, paying flat cap"
        );
        let cap = constants.max_dependency_allowance_amount;
        (
            cap,
            format!(
                "{} dependants exceeds maximum of {} - flat ${} paid",
                dependants,
                max_factor,
                cap.normalize()
            ),
        )
    } else {
        let amount = Decimal::from(dependants)
            .checked_mul(per_child)
            .ok_or_else(|| {
                PayrollError::overflow("dependency_allowance_per_child_amount", per_child)
            })?;
        (
            amount,
            format!(
                "{} dependants x ${} = ${}",
                dependants,
                per_child.normalize(),
                amount.normalize()
            ),
        )
    };

    let component = SlipComponent::DependencyAllowance;
    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "total_dependencies": dependants,
            "per_child_amount": per_child.normalize().to_string(),
            "max_dependants": max_factor
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    };

    Ok(DependencyAllowanceResult {
        amount,
        cap_applied,
        audit_step,
    })
}
