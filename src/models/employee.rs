//! Employee model and related types.
//!
//! This module defines the Employee struct and WorkPlatform enum used as
//! the input record for every salary slip calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Where the employee does their work. Drives the transportation allowance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPlatform {
    /// Works on site every day (full transportation allowance).
    #[default]
    Office,
    /// Works from home (no transportation allowance).
    Remote,
    /// Splits time between site and home (half allowance).
    Hybrid,
}

/// The attributes of an employee a salary slip is calculated from.
///
/// The record is read-only for the duration of a calculation. Every field
/// has a default so callers (and JSON payloads) only need to set what a
/// given rule reads.
///
/// # Examples
///
/// ```
/// use salary_slip::models::{Employee, WorkPlatform};
/// use rust_decimal_macros::dec;
///
/// let employee = Employee {
///     wage: dec!(500),
///     working_days: 20,
///     work_platform: WorkPlatform::Hybrid,
///     ..Employee::default()
/// };
/// assert_eq!(employee.basic_salary().unwrap(), dec!(10000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    /// Daily wage rate.
    pub wage: Decimal,
    /// Days worked in the pay period.
    pub working_days: u32,
    /// Office, remote or hybrid.
    pub work_platform: WorkPlatform,
    /// Explicit danger pay flag. When set the duty station is not consulted.
    pub is_danger: bool,
    /// Name of the work location, classified by the zone service.
    pub duty_station: String,
    /// Whether the employee is married.
    pub is_married: bool,
    /// Number of dependants claimed. Negative values are rejected by the
    /// dependency allowance rule.
    pub total_dependencies: i32,
    /// Whether the employee contributes to the pension plan.
    pub has_pension_plan: bool,
}

impl Employee {
    /// Wage multiplied by working days.
    ///
    /// Fails with [`PayrollError::OutOfRange`] on the `wage` field when the
    /// product does not fit in a [`Decimal`].
    pub fn basic_salary(&self) -> PayrollResult<Decimal> {
        self.wage
            .checked_mul(Decimal::from(self.working_days))
            .ok_or_else(|| PayrollError::overflow("wage", self.wage))
    }
}
