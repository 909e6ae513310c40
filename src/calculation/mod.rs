//! Calculation logic for the salary slip engine.
//!
//! One module per slip component: basic salary, transportation allowance,
//! danger pay, spouse allowance, dependency allowance, pension and tax. Each
//! rule returns its amount together with an audit step. The
//! [`SalarySlipProcessor`] wraps them with the absent-employee check and the
//! injected zone service, and assembles full salary slips.

mod basic_salary;
mod danger_pay;
mod dependency_allowance;
mod pension;
mod processor;
mod spouse_allowance;
mod tax;
mod transportation_allowance;

pub use basic_salary::{BasicSalaryResult, calculate_basic_salary};
pub use danger_pay::{DangerPayResult, calculate_danger_pay};
pub use dependency_allowance::{DependencyAllowanceResult, calculate_dependency_allowance};
pub use pension::{PensionResult, calculate_pension};
pub use processor::SalarySlipProcessor;
pub use spouse_allowance::{SpouseAllowanceResult, calculate_spouse_allowance};
pub use tax::{TaxResult, calculate_tax};
pub use transportation_allowance::{
    TransportationAllowanceResult, calculate_transportation_allowance,
};
