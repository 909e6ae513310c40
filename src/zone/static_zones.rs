//! A [`ZoneService`] backed by a fixed list of station names.

use std::collections::HashSet;

use super::{ZoneService, ZoneServiceError};

/// Classifies duty stations against a static list loaded at startup.
///
/// Matching ignores case and surrounding whitespace.
///
/// # Example
///
/// ```
/// use salary_slip::zone::{StaticZoneService, ZoneService};
///
/// let zones = StaticZoneService::new(["North Ridge Outpost"]);
/// assert!(zones.is_danger_zone("north ridge outpost").unwrap());
/// assert!(!zones.is_danger_zone("Head Office").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticZoneService {
    stations: HashSet<String>,
}

impl StaticZoneService {
    /// Creates a service from any collection of station names. Blank names are dropped.
    pub fn new<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stations = stations
            .into_iter()
            .map(|s| normalize(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        Self { stations }
    }

    /// Number of stations classified as danger zones.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no station is classified as a danger zone.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ZoneService for StaticZoneService {
    fn is_danger_zone(&self, station_name: &str) -> Result<bool, ZoneServiceError> {
        let key = normalize(station_name);
        if key.is_empty() {
            return Ok(false);
        }
        Ok(self.stations.contains(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> StaticZoneService {
        StaticZoneService::new(["North Ridge Outpost", "  Delta Pipeline Camp ", ""])
    }

    #[test]
    fn test_listed_station_is_danger_zone() {
        assert!(service().is_danger_zone("North Ridge Outpost").unwrap());
    }

    #[test]
    fn test_match_ignores_case_and_whitespace() {
        let zones = service();
        assert!(zones.is_danger_zone("north ridge outpost").unwrap());
        assert!(zones.is_danger_zone("DELTA PIPELINE CAMP  ").unwrap());
    }

    #[test]
    fn test_unknown_station_is_not_danger_zone() {
        assert!(!service().is_danger_zone("Head Office").unwrap());
    }

    #[test]
    fn test_empty_station_is_not_danger_zone() {
        assert!(!service().is_danger_zone("").unwrap());
        assert!(!service().is_danger_zone("   ").unwrap());
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        assert_eq!(service().len(), 2);
        assert!(StaticZoneService::default().is_empty());
    }
}
