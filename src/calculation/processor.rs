//! The salary slip processor.
//!
//! [`SalarySlipProcessor`] binds the policy table and the zone service
//! together and exposes one method per slip component, plus
//! [`SalarySlipProcessor::calculate_salary_slip`] which runs them all.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PolicyConstants;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AuditStep, AuditTrace, Employee, SalarySlip, SlipComponent, SlipLine, SlipTotals,
};
use crate::zone::ZoneService;

use super::basic_salary::calculate_basic_salary;
use super::danger_pay::calculate_danger_pay;
use super::dependency_allowance::calculate_dependency_allowance;
use super::pension::calculate_pension;
use super::spouse_allowance::calculate_spouse_allowance;
use super::tax::calculate_tax;
use super::transportation_allowance::calculate_transportation_allowance;

/// Calculates salary slip components for employees.
///
/// Every method takes the employee as `impl Into<Option<&Employee>>`, so both
/// `&employee` and `None` are accepted. An absent employee fails with
/// [`PayrollError::MissingArgument`] before anything else happens.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use salary_slip::calculation::SalarySlipProcessor;
/// use salary_slip::config::PolicyConstants;
/// use salary_slip::models::Employee;
/// use salary_slip::zone::StaticZoneService;
/// use rust_decimal_macros::dec;
///
/// let processor = SalarySlipProcessor::new(PolicyConstants::default())
///     .with_zone_service(Arc::new(StaticZoneService::new(["North Ridge Outpost"])));
///
/// let employee = Employee {
///     wage: dec!(500),
///     working_days: 20,
///     duty_station: "North Ridge Outpost".to_string(),
///     ..Employee::default()
/// };
///
/// assert_eq!(processor.calculate_basic_salary(&employee)?, dec!(10000));
/// assert_eq!(processor.calculate_danger_pay(&employee)?, dec!(250));
/// # Ok::<(), salary_slip::error::PayrollError>(())
/// ```
#[derive(Clone)]
pub struct SalarySlipProcessor {
    constants: PolicyConstants,
    zone_service: Option<Arc<dyn ZoneService>>,
}

impl std::fmt::Debug for SalarySlipProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalarySlipProcessor")
            .field("constants", &self.constants)
            .field("zone_service", &self.zone_service.is_some())
            .finish()
    }
}

fn require<'a>(employee: impl Into<Option<&'a Employee>>) -> PayrollResult<&'a Employee> {
    employee.into().ok_or_else(PayrollError::missing_employee)
}

fn checked_total(field: &str, lines: &[SlipLine]) -> PayrollResult<Decimal> {
    lines.iter().try_fold(Decimal::ZERO, |total, line| {
        total
            .checked_add(line.amount)
            .ok_or_else(|| PayrollError::overflow(field, line.amount))
    })
}

impl SalarySlipProcessor {
    /// Creates a processor without a zone service.
    ///
    /// Danger pay for employees without the `is_danger` flag will fail with
    /// [`PayrollError::ZoneServiceUnavailable`] until one is attached.
    pub fn new(constants: PolicyConstants) -> Self {
        Self {
            constants,
            zone_service: None,
        }
    }

    /// Attaches the zone service used to classify duty stations.
    pub fn with_zone_service(mut self, zone_service: Arc<dyn ZoneService>) -> Self {
        self.zone_service = Some(zone_service);
        self
    }

    /// Returns the policy table this processor calculates with.
    pub fn constants(&self) -> &PolicyConstants {
        &self.constants
    }

    fn zones(&self) -> Option<&dyn ZoneService> {
        self.zone_service.as_deref()
    }

    /// Wage multiplied by working days.
    pub fn calculate_basic_salary<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_basic_salary(employee, 1)?.amount)
    }

    /// Full allowance for office, half for hybrid, none for remote.
    pub fn calculate_transportation_allowance<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_transportation_allowance(employee, &self.constants, 1).amount)
    }

    /// Danger pay for flagged employees or danger zone postings.
    ///
    /// The zone service is consulted only when `is_danger` is false, and its
    /// errors are returned unchanged.
    pub fn calculate_danger_pay<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_danger_pay(employee, &self.constants, self.zones(), 1)?.amount)
    }

    /// Spouse allowance for married employees.
    pub fn calculate_spouse_allowance<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_spouse_allowance(employee, &self.constants, 1).amount)
    }

    /// Per-child allowance, or the flat maximum above the dependant cap.
    ///
    /// Fails with [`PayrollError::OutOfRange`] for a negative dependant count.
    pub fn calculate_dependency_allowance<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_dependency_allowance(employee, &self.constants, 1)?.amount)
    }

    /// Pension rate applied to basic salary for plan members.
    pub fn calculate_pension<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_pension(employee, &self.constants, 1)?.amount)
    }

    /// Tax on basic salary under the configured tiers; zero without a tax policy.
    pub fn calculate_tax<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_tax(employee, &self.constants, 1)?.amount)
    }

    /// Calculates a single component by name.
    pub fn calculate_component<'a>(
        &self,
        component: SlipComponent,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<Decimal> {
        let employee = require(employee)?;
        match component {
            SlipComponent::BasicSalary => self.calculate_basic_salary(employee),
            SlipComponent::TransportationAllowance => {
                self.calculate_transportation_allowance(employee)
            }
            SlipComponent::DangerPay => self.calculate_danger_pay(employee),
            SlipComponent::SpouseAllowance => self.calculate_spouse_allowance(employee),
            SlipComponent::DependencyAllowance => self.calculate_dependency_allowance(employee),
            SlipComponent::Pension => self.calculate_pension(employee),
            SlipComponent::Tax => self.calculate_tax(employee),
        }
    }

    /// Runs every rule and assembles the full salary slip.
    ///
    /// The first failing rule aborts the slip; no partial slip is returned.
    /// Totals that overflow fail with [`PayrollError::OutOfRange`].
    pub fn calculate_salary_slip<'a>(
        &self,
        employee: impl Into<Option<&'a Employee>>,
    ) -> PayrollResult<SalarySlip> {
        let employee = require(employee)?;
        let start_time = Instant::now();
        let constants = &self.constants;

        let mut steps: Vec<AuditStep> = Vec::with_capacity(SlipComponent::ALL.len());
        let mut earnings: Vec<SlipLine> = Vec::new();
        let mut deductions: Vec<SlipLine> = Vec::new();

        let basic = calculate_basic_salary(employee, 1)?;
        let transportation = calculate_transportation_allowance(employee, constants, 2);
        let danger = calculate_danger_pay(employee, constants, self.zones(), 3)?;
        let spouse = calculate_spouse_allowance(employee, constants, 4);
        let dependency = calculate_dependency_allowance(employee, constants, 5)?;
        let pension = calculate_pension(employee, constants, 6)?;
        let tax = calculate_tax(employee, constants, 7)?;

        let lines = [
            (SlipComponent::BasicSalary, basic.amount, basic.audit_step),
            (
                SlipComponent::TransportationAllowance,
                transportation.amount,
                transportation.audit_step,
            ),
            (SlipComponent::DangerPay, danger.amount, danger.audit_step),
            (SlipComponent::SpouseAllowance, spouse.amount, spouse.audit_step),
            (
                SlipComponent::DependencyAllowance,
                dependency.amount,
                dependency.audit_step,
            ),
            (SlipComponent::Pension, pension.amount, pension.audit_step),
            (SlipComponent::Tax, tax.amount, tax.audit_step),
        ];

        for (component, amount, audit_step) in lines {
            let line = SlipLine {
                component,
                description: component.display_name().to_string(),
                amount,
            };
            if component.is_deduction() {
                deductions.push(line);
            } else {
                earnings.push(line);
            }
            steps.push(audit_step);
        }

        let gross_pay = checked_total("gross_pay", &earnings)?;
        let deductions_total = checked_total("deductions_total", &deductions)?;
        let totals = SlipTotals {
            basic_salary: basic.amount,
            allowances_total: gross_pay - basic.amount,
            gross_pay,
            deductions_total,
            net_pay: gross_pay - deductions_total,
        };

        Ok(SalarySlip {
            slip_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            earnings,
            deductions,
            totals,
            audit_trace: AuditTrace {
                steps,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        })
    }
}
