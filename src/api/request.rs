//! Request types for the salary slip API.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for the salary slip endpoints.
///
/// `employee` is optional at the wire level so an absent record reaches the
/// processor and is reported as a missing argument rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalarySlipRequest {
    /// The employee to calculate for.
    #[serde(default)]
    pub employee: Option<Employee>,
}
