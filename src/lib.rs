//! Salary Slip Engine
//!
//! This crate computes the components of an employee's salary slip (basic
//! salary, allowances and deductions) from a handful of employee attributes
//! and an immutable policy table, with danger zone classification delegated
//! to an injected [`zone::ZoneService`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod zone;
