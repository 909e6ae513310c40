//! Application state for the salary slip API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::SalarySlipProcessor;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the processor built once from the loaded policy and zone list.
#[derive(Clone)]
pub struct AppState {
    processor: Arc<SalarySlipProcessor>,
}

impl AppState {
    /// Creates state from a loaded configuration, wiring its static zone list
    /// in as the zone service.
    pub fn new(config: ConfigLoader) -> Self {
        let processor = SalarySlipProcessor::new(*config.constants())
            .with_zone_service(Arc::new(config.zone_service()));
        Self::from_processor(processor)
    }

    /// Creates state around an already configured processor.
    pub fn from_processor(processor: SalarySlipProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Returns the shared processor.
    pub fn processor(&self) -> &SalarySlipProcessor {
        &self.processor
    }
}
