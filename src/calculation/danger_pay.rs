//! Danger pay calculation.
//!
//! Employees flagged `is_danger` always receive danger pay. Everyone else
//! receives it only when the zone service classifies their duty station as
//! a danger zone. The flag short-circuits the lookup.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConstants;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Employee, SlipComponent};
use crate::zone::ZoneService;

/// The result of calculating danger pay.
#[derive(Debug, Clone)]
pub struct DangerPayResult {
    /// The danger pay amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates danger pay.
///
/// # Errors
///
/// - [`PayrollError::ZoneService`] when the zone lookup fails. The error is
///   forwarded as-is.
/// - [`PayrollError::ZoneServiceUnavailable`] when a lookup is needed but
///   `zone_service` is `None`.
///
/// # Examples
///
/// ```
/// use salary_slip::calculation::calculate_danger_pay;
/// use salary_slip::config::PolicyConstants;
/// use salary_slip::models::Employee;
/// use salary_slip::zone::StaticZoneService;
///
/// let constants = PolicyConstants::default();
/// let zones = StaticZoneService::new(["Delta Pipeline Camp"]);
/// let employee = Employee {
///     duty_station: "Delta Pipeline Camp".to_string(),
///     ..Employee::default()
/// };
///
/// let result = calculate_danger_pay(&employee, &constants, Some(&zones), 1).unwrap();
/// assert_eq!(result.amount, constants.danger_pay_amount);
/// ```
pub fn calculate_danger_pay(
    employee: &Employee,
    constants: &PolicyConstants,
    zone_service: Option<&dyn ZoneService>,
    step_number: u32,
) -> PayrollResult<DangerPayResult> {
    let full = constants.danger_pay_amount;
    let component = SlipComponent::DangerPay;

    if employee.is_danger {
        let audit_step = AuditStep {
            step_number,
            rule_id: component.rule_id().to_string(),
            rule_name: component.display_name().to_string(),
            input: serde_json::json!({
                "is_danger": true,
                "duty_station": employee.duty_station
            }),
            output: serde_json::json!({
                "zone_lookup": false,
                "amount": full.normalize().to_string()
            }),
            reasoning: format!(
                "Employee is flagged for danger pay - paid ${} without a zone lookup",
                full.normalize()
            ),
        };
        return Ok(DangerPayResult {
            amount: full,
            audit_step,
        });
    }

    let station = employee.duty_station.as_str();
    let zones = zone_service.ok_or_else(|| PayrollError::ZoneServiceUnavailable {
        station: station.to_string(),
    })?;

    let in_danger_zone = zones.is_danger_zone(station)?;
    debug!(duty_station = %station, in_danger_zone, "Zone lookup completed");

    let amount = if in_danger_zone { full } else { Decimal::ZERO };
    let reasoning = if in_danger_zone {
        format!(
            "Duty station '{}' is a danger zone - paid ${}",
            station,
            full.normalize()
        )
    } else {
        format!("Duty station '{}' is not a danger zone - no danger pay", station)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: component.rule_id().to_string(),
        rule_name: component.display_name().to_string(),
        input: serde_json::json!({
            "is_danger": false,
            "duty_station": station
        }),
        output: serde_json::json!({
            "zone_lookup": true,
            "in_danger_zone": in_danger_zone,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(DangerPayResult { amount, audit_step })
}
