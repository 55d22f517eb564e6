// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model.
//!
//! A [`Workout`] is immutable after construction. The kind-specific input
//! field and its derived metric live in a tagged [`WorkoutDetails`] variant,
//! so a record can never exist without the behavior of its variant. Records
//! are built only through the factory (validated user input) or the
//! persistence adapter (replayed snapshot); both go through the same
//! construction path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::LatLng;
use crate::time_utils;

/// Opaque workout identifier.
///
/// Assigned once by the factory at creation and used as the join key
/// between a rendered list entry and its map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(Uuid);

impl WorkoutId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Workout kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::Cycling => write!(f, "Cycling"),
        }
    }
}

/// Kind-specific input field, already validated by the factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum VariantInput {
    Running { cadence_spm: u32 },
    Cycling { elevation_gain_m: f64 },
}

/// Kind-specific fields plus the derived metric computed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    Running {
        /// Cadence in steps per minute
        cadence_spm: u32,
        /// Pace in minutes per kilometer (duration / distance)
        pace_min_per_km: f64,
    },
    Cycling {
        /// Elevation gain in meters (zero is legal)
        elevation_gain_m: f64,
        /// Speed in km/h (distance / hours)
        speed_km_per_h: f64,
    },
}

/// One logged workout, placed on the map at `coords`.
///
/// Fields are private; the accessor methods below are the full public
/// surface. There is no mutating API.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: LatLng,
    distance_km: f64,
    duration_min: f64,
    details: WorkoutDetails,
    description: String,
}

impl Workout {
    /// Construction path shared by the factory and snapshot replay.
    ///
    /// Inputs must already satisfy the validation rules. The derived metric
    /// is computed here, exactly once, before the description is generated
    /// (the description reads only the kind and `created_at`).
    pub(crate) fn build(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        input: VariantInput,
    ) -> Self {
        let details = match input {
            VariantInput::Running { cadence_spm } => WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: duration_min / distance_km,
            },
            VariantInput::Cycling { elevation_gain_m } => WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: distance_km / (duration_min / 60.0),
            },
        };

        let kind = match details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        };
        let description = format!("{} on {}", kind, time_utils::format_month_day(created_at));

        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            details,
            description,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> LatLng {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Human-readable label, e.g. "Running on April 14".
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// The variant's derived metric (pace for running, speed for cycling).
    pub fn derived_metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            WorkoutDetails::Cycling {
                speed_km_per_h, ..
            } => speed_km_per_h,
        }
    }

    /// Pace in min/km; `None` for cycling workouts.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h; `None` for running workouts.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { .. } => None,
            WorkoutDetails::Cycling {
                speed_km_per_h, ..
            } => Some(speed_km_per_h),
        }
    }

    /// Cadence in steps/min; `None` for cycling workouts.
    pub fn cadence_spm(&self) -> Option<u32> {
        match self.details {
            WorkoutDetails::Running { cadence_spm, .. } => Some(cadence_spm),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Elevation gain in meters; `None` for running workouts.
    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => Some(elevation_gain_m),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_running_pace_and_description() {
        let w = Workout::build(
            WorkoutId::new(),
            at(2024, 4, 14),
            LatLng::new(10.0, 20.0),
            5.0,
            30.0,
            VariantInput::Running { cadence_spm: 170 },
        );

        assert_eq!(w.kind(), WorkoutKind::Running);
        assert_eq!(w.pace_min_per_km(), Some(6.0));
        assert_eq!(w.speed_km_per_h(), None);
        assert_eq!(w.cadence_spm(), Some(170));
        assert_eq!(w.description(), "Running on April 14");
    }

    #[test]
    fn test_cycling_speed_and_description() {
        let w = Workout::build(
            WorkoutId::new(),
            at(2024, 7, 3),
            LatLng::new(10.0, 20.0),
            20.0,
            60.0,
            VariantInput::Cycling {
                elevation_gain_m: 250.0,
            },
        );

        assert_eq!(w.kind(), WorkoutKind::Cycling);
        assert_eq!(w.speed_km_per_h(), Some(20.0));
        assert_eq!(w.pace_min_per_km(), None);
        assert_eq!(w.elevation_gain_m(), Some(250.0));
        assert_eq!(w.description(), "Cycling on July 3");
    }

    #[test]
    fn test_derived_metric_matches_variant() {
        let run = Workout::build(
            WorkoutId::new(),
            at(2024, 1, 1),
            LatLng::new(0.0, 0.0),
            10.0,
            50.0,
            VariantInput::Running { cadence_spm: 180 },
        );
        let ride = Workout::build(
            WorkoutId::new(),
            at(2024, 1, 1),
            LatLng::new(0.0, 0.0),
            30.0,
            90.0,
            VariantInput::Cycling {
                elevation_gain_m: 0.0,
            },
        );

        assert_eq!(run.derived_metric(), 5.0);
        assert_eq!(ride.derived_metric(), 20.0);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(WorkoutId::new(), WorkoutId::new());
    }
}
