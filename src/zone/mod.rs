//! Danger zone classification.
//!
//! The calculator never decides on its own whether a duty station is
//! hazardous. It asks a [`ZoneService`], supplied at construction, and
//! treats the answer as authoritative.

mod static_zones;

use thiserror::Error;

pub use static_zones::StaticZoneService;

/// Errors a [`ZoneService`] implementation may raise.
///
/// The calculator forwards these to its caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneServiceError {
    /// The lookup itself failed (backing registry unreachable, etc.).
    #[error("Zone lookup failed for '{station}': {message}")]
    Lookup {
        /// The duty station being classified.
        station: String,
        /// A description of the failure.
        message: String,
    },
}

/// Capability: decide whether a duty station is a danger zone.
///
/// Implementations must answer `Ok(false)` for empty or unrecognised
/// station names rather than failing.
///
/// # Example
///
/// ```
/// use salary_slip::zone::{ZoneService, ZoneServiceError};
///
/// struct Everywhere;
///
/// impl ZoneService for Everywhere {
///     fn is_danger_zone(&self, _station_name: &str) -> Result<bool, ZoneServiceError> {
///         Ok(true)
///     }
/// }
///
/// assert!(Everywhere.is_danger_zone("Harbour Depot").unwrap());
/// ```
pub trait ZoneService: Send + Sync {
    /// Returns `true` when `station_name` is classified as hazardous.
    fn is_danger_zone(&self, station_name: &str) -> Result<bool, ZoneServiceError>;
}
