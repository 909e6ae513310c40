//! Core data models for the salary slip engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod salary_slip;

pub use employee::{Employee, WorkPlatform};
pub use salary_slip::{AuditStep, AuditTrace, SalarySlip, SlipComponent, SlipLine, SlipTotals};
