//! Configuration loading and management for the salary slip engine.
//!
//! This module loads the policy table (allowance amounts, pension rate,
//! optional tax tiers) and the danger zone list from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_slip::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRates, PensionConfig, PolicyConstants, PolicyFile, PolicyMetadata, TaxPolicy,
    ZonesFile,
};
