//! HTTP API module for the salary slip engine.
//!
//! This module exposes the processor over HTTP: one endpoint for the full
//! slip and one per component.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SalarySlipRequest;
pub use response::{ApiError, ComponentResponse};
pub use state::AppState;
