// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Geographic coordinate pair used to place workouts on the map.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, valid range [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180]
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both components are finite and within geographic range.
    ///
    /// Coordinates normally arrive from the map widget and are range-valid
    /// by construction; the factory still re-checks before building a record.
    pub fn is_in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(LatLng::new(0.0, 0.0).is_in_range());
        assert!(LatLng::new(-90.0, 180.0).is_in_range());
        assert!(LatLng::new(90.0, -180.0).is_in_range());
        assert!(LatLng::new(37.33, -122.09).is_in_range());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        assert!(!LatLng::new(90.1, 0.0).is_in_range());
        assert!(!LatLng::new(-90.1, 0.0).is_in_range());
        assert!(!LatLng::new(0.0, 180.1).is_in_range());
        assert!(!LatLng::new(0.0, -180.1).is_in_range());
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(!LatLng::new(f64::NAN, 0.0).is_in_range());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_in_range());
    }
}
