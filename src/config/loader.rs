//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! policy and danger zone list from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::zone::StaticZoneService;

use super::types::{PolicyConstants, PolicyFile, PolicyMetadata, ZonesFile};

/// Loads and validates the salary policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml   # Policy metadata, allowance amounts, pension rate, optional tax tiers
/// └── zones.yaml    # Duty stations classified as danger zones (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_slip::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Loaded policy: {}", loader.policy().name);
/// # Ok::<(), salary_slip::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: PolicyMetadata,
    constants: PolicyConstants,
    danger_zones: Vec<String>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, either file contains
    /// invalid YAML, or the policy holds values the rules cannot use
    /// (negative amounts, rates outside `[0, 1]`, inverted tax thresholds).
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let policy_file = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;

        let zones_path = path.join("zones.yaml");
        let zones = if zones_path.exists() {
            Self::load_yaml::<ZonesFile>(&zones_path)?
        } else {
            ZonesFile::default()
        };

        let constants = PolicyConstants::from(&policy_file);
        validate(&constants)?;

        Ok(Self {
            metadata: policy_file.policy,
            constants,
            danger_zones: zones.danger_zones,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the validated policy constants.
    pub fn constants(&self) -> &PolicyConstants {
        &self.constants
    }

    /// Returns the configured danger zone station names.
    pub fn danger_zones(&self) -> &[String] {
        &self.danger_zones
    }

    /// Builds a [`StaticZoneService`] from the configured danger zones.
    pub fn zone_service(&self) -> StaticZoneService {
        StaticZoneService::new(&self.danger_zones)
    }
}

fn non_negative(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidPolicy {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

fn unit_rate(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(PayrollError::InvalidPolicy {
            field: field.to_string(),
            message: format!("must be between 0 and 1, got {}", value),
        });
    }
    Ok(())
}

/// Checks the constants against what the rules assume.
pub(crate) fn validate(constants: &PolicyConstants) -> PayrollResult<()> {
    non_negative(
        "transportation_allowance_amount",
        constants.transportation_allowance_amount,
    )?;
    non_negative("danger_pay_amount", constants.danger_pay_amount)?;
    non_negative("spouse_allowance_amount", constants.spouse_allowance_amount)?;
    non_negative(
        "dependency_allowance_per_child_amount",
        constants.dependency_allowance_per_child_amount,
    )?;
    non_negative(
        "max_dependency_allowance_amount",
        constants.max_dependency_allowance_amount,
    )?;
    unit_rate("pension_rate", constants.pension_rate)?;

    if let Some(tax) = &constants.tax {
        non_negative("tax.low_threshold", tax.low_threshold)?;
        if tax.medium_threshold < tax.low_threshold {
            return Err(PayrollError::InvalidPolicy {
                field: "tax.medium_threshold".to_string(),
                message: format!(
                    "must not be below low_threshold ({} < {})",
                    tax.medium_threshold, tax.low_threshold
                ),
            });
        }
        unit_rate("tax.low_rate", tax.low_rate)?;
        unit_rate("tax.medium_rate", tax.medium_rate)?;
        unit_rate("tax.high_rate", tax.high_rate)?;
    }

    Ok(())
}
