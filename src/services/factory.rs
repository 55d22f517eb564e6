// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout factory and validator.
//!
//! The only path from user-entered fields to a [`Workout`]. Validation is
//! all-or-nothing: the first failing rule rejects the whole submission and
//! nothing is constructed.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::models::workout::VariantInput;
use crate::models::{LatLng, Workout, WorkoutId, WorkoutKind};
use crate::surface::RawWorkoutForm;

/// Builds validated workout records.
pub struct WorkoutFactory;

impl WorkoutFactory {
    /// Create a workout from typed inputs, stamped with the current time.
    ///
    /// `extra` is the kind-specific field: cadence (steps/min) for running,
    /// elevation gain (meters) for cycling.
    pub fn create(
        kind: WorkoutKind,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<Workout, ValidationError> {
        Self::create_at(kind, coords, distance_km, duration_min, extra, Utc::now())
    }

    /// Create a workout with an explicit capture timestamp.
    pub fn create_at(
        kind: WorkoutKind,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
        now: DateTime<Utc>,
    ) -> Result<Workout, ValidationError> {
        // Coordinates come from the map collaborator and should already be
        // range-valid; re-check before trusting them.
        if !coords.is_in_range() {
            return Err(ValidationError::CoordinatesOutOfRange {
                lat: coords.lat,
                lng: coords.lng,
            });
        }

        require_finite(distance_km, "distance")?;
        require_finite(duration_min, "duration")?;
        require_positive(distance_km, "distance")?;
        require_positive(duration_min, "duration")?;

        let input = match kind {
            WorkoutKind::Running => {
                require_finite(extra, "cadence")?;
                require_positive(extra, "cadence")?;
                if extra.fract() != 0.0 || extra > f64::from(u32::MAX) {
                    return Err(ValidationError::FractionalCadence);
                }
                VariantInput::Running {
                    cadence_spm: extra as u32,
                }
            }
            WorkoutKind::Cycling => {
                require_finite(extra, "elevation gain")?;
                // Zero elevation gain is legal (flat ride); negative is not.
                if extra < 0.0 {
                    return Err(ValidationError::NegativeElevation);
                }
                VariantInput::Cycling {
                    elevation_gain_m: extra,
                }
            }
        };

        Ok(Workout::build(
            WorkoutId::new(),
            now,
            coords,
            distance_km,
            duration_min,
            input,
        ))
    }

    /// Create a workout from the raw form fields, stamped with the current
    /// time. Unparsable fields are rejected like any other invalid input.
    pub fn from_form(
        coords: LatLng,
        fields: &RawWorkoutForm,
    ) -> Result<Workout, ValidationError> {
        Self::from_form_at(coords, fields, Utc::now())
    }

    /// Create a workout from the raw form fields with an explicit timestamp.
    pub fn from_form_at(
        coords: LatLng,
        fields: &RawWorkoutForm,
        now: DateTime<Utc>,
    ) -> Result<Workout, ValidationError> {
        let kind = match fields.kind.trim() {
            "running" => WorkoutKind::Running,
            "cycling" => WorkoutKind::Cycling,
            other => return Err(ValidationError::UnknownKind(other.to_string())),
        };

        let distance_km = parse_field(&fields.distance, "distance")?;
        let duration_min = parse_field(&fields.duration, "duration")?;
        let extra = match kind {
            WorkoutKind::Running => parse_field(&fields.cadence, "cadence")?,
            WorkoutKind::Cycling => parse_field(&fields.elevation, "elevation gain")?,
        };

        Self::create_at(kind, coords, distance_km, duration_min, extra, now)
    }
}

fn parse_field(raw: &str, name: &'static str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber(name))
}

fn require_finite(value: f64, name: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite(name))
    }
}

fn require_positive(value: f64, name: &'static str) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> LatLng {
        LatLng::new(10.0, 20.0)
    }

    #[test]
    fn test_running_create() {
        let w = WorkoutFactory::create(WorkoutKind::Running, coords(), 5.0, 30.0, 170.0)
            .expect("valid running workout");

        assert_eq!(w.kind(), WorkoutKind::Running);
        assert_eq!(w.pace_min_per_km(), Some(6.0));
        assert_eq!(w.cadence_spm(), Some(170));
    }

    #[test]
    fn test_cycling_create() {
        let w = WorkoutFactory::create(WorkoutKind::Cycling, coords(), 20.0, 60.0, 150.0)
            .expect("valid cycling workout");

        assert_eq!(w.kind(), WorkoutKind::Cycling);
        assert_eq!(w.speed_km_per_h(), Some(20.0));
        assert_eq!(w.elevation_gain_m(), Some(150.0));
    }

    #[test]
    fn test_zero_distance_rejected() {
        let err = WorkoutFactory::create(WorkoutKind::Running, coords(), 0.0, 30.0, 170.0)
            .unwrap_err();
        assert_eq!(err, ValidationError::NotPositive("distance"));
    }

    #[test]
    fn test_nan_duration_rejected() {
        let err =
            WorkoutFactory::create(WorkoutKind::Running, coords(), 5.0, f64::NAN, 170.0)
                .unwrap_err();
        assert_eq!(err, ValidationError::NotFinite("duration"));
    }

    #[test]
    fn test_zero_elevation_accepted() {
        let w = WorkoutFactory::create(WorkoutKind::Cycling, coords(), 20.0, 60.0, 0.0)
            .expect("flat ride is valid");
        assert_eq!(w.elevation_gain_m(), Some(0.0));
    }

    #[test]
    fn test_negative_elevation_rejected() {
        let err = WorkoutFactory::create(WorkoutKind::Cycling, coords(), 20.0, 60.0, -5.0)
            .unwrap_err();
        assert_eq!(err, ValidationError::NegativeElevation);
    }

    #[test]
    fn test_fractional_cadence_rejected() {
        let err = WorkoutFactory::create(WorkoutKind::Running, coords(), 5.0, 30.0, 170.5)
            .unwrap_err();
        assert_eq!(err, ValidationError::FractionalCadence);
    }

    #[test]
    fn test_out_of_range_coords_rejected() {
        let bad = LatLng::new(91.0, 20.0);
        let err =
            WorkoutFactory::create(WorkoutKind::Running, bad, 5.0, 30.0, 170.0).unwrap_err();
        assert!(matches!(err, ValidationError::CoordinatesOutOfRange { .. }));
    }

    #[test]
    fn test_form_parse_running() {
        let fields = RawWorkoutForm {
            kind: "running".to_string(),
            distance: "5".to_string(),
            duration: "25".to_string(),
            cadence: "178".to_string(),
            elevation: String::new(),
        };

        let w = WorkoutFactory::from_form(coords(), &fields).expect("valid form");
        assert_eq!(w.pace_min_per_km(), Some(5.0));
        assert_eq!(w.cadence_spm(), Some(178));
    }

    #[test]
    fn test_form_garbage_distance_rejected() {
        let fields = RawWorkoutForm {
            kind: "cycling".to_string(),
            distance: "fast".to_string(),
            duration: "60".to_string(),
            cadence: String::new(),
            elevation: "0".to_string(),
        };

        let err = WorkoutFactory::from_form(coords(), &fields).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber("distance"));
    }

    #[test]
    fn test_form_unknown_kind_rejected() {
        let fields = RawWorkoutForm {
            kind: "rowing".to_string(),
            distance: "5".to_string(),
            duration: "25".to_string(),
            cadence: "178".to_string(),
            elevation: String::new(),
        };

        let err = WorkoutFactory::from_form(coords(), &fields).unwrap_err();
        assert_eq!(err, ValidationError::UnknownKind("rowing".to_string()));
    }
}
