// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence adapter mirroring the session store into durable storage.
//!
//! The snapshot holds only the minimal constructor inputs plus the kind
//! discriminant, never the derived fields. `load` dispatches on the
//! discriminant and replays the normal construction path, so a rehydrated
//! record re-computes its derived metric and description and behaves
//! exactly like a freshly created one. [`Workout`] itself is deliberately
//! not serializable; this module owns the only stored representation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::workout::VariantInput;
use crate::models::{LatLng, Workout, WorkoutId};
use crate::storage::{keys, KeyValueStore};

/// Stored form of one workout: constructor inputs plus discriminant.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum WorkoutSnapshot {
    Running {
        id: WorkoutId,
        created_at: chrono::DateTime<chrono::Utc>,
        lat: f64,
        lng: f64,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    },
    Cycling {
        id: WorkoutId,
        created_at: chrono::DateTime<chrono::Utc>,
        lat: f64,
        lng: f64,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

impl WorkoutSnapshot {
    fn from_workout(workout: &Workout) -> Self {
        let coords = workout.coords();
        match *workout.details() {
            crate::models::WorkoutDetails::Running { cadence_spm, .. } => Self::Running {
                id: workout.id(),
                created_at: workout.created_at(),
                lat: coords.lat,
                lng: coords.lng,
                distance_km: workout.distance_km(),
                duration_min: workout.duration_min(),
                cadence_spm,
            },
            crate::models::WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => Self::Cycling {
                id: workout.id(),
                created_at: workout.created_at(),
                lat: coords.lat,
                lng: coords.lng,
                distance_km: workout.distance_km(),
                duration_min: workout.duration_min(),
                elevation_gain_m,
            },
        }
    }

    /// Rebuild the full record by replaying the construction path.
    fn replay(self) -> Workout {
        match self {
            Self::Running {
                id,
                created_at,
                lat,
                lng,
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::build(
                id,
                created_at,
                LatLng::new(lat, lng),
                distance_km,
                duration_min,
                VariantInput::Running { cadence_spm },
            ),
            Self::Cycling {
                id,
                created_at,
                lat,
                lng,
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::build(
                id,
                created_at,
                LatLng::new(lat, lng),
                distance_km,
                duration_min,
                VariantInput::Cycling { elevation_gain_m },
            ),
        }
    }
}

/// Mirrors the full workout log into one key-value slot.
pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize the full ordered sequence, replacing any prior snapshot.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<()> {
        let snapshots: Vec<WorkoutSnapshot> =
            workouts.iter().map(WorkoutSnapshot::from_workout).collect();
        let json = serde_json::to_string(&snapshots)
            .map_err(|e| crate::error::AppError::Storage(e.to_string()))?;

        self.store.set_item(keys::WORKOUTS, &json)?;
        tracing::debug!(count = workouts.len(), "Workout snapshot written");
        Ok(())
    }

    /// Rebuild the workout sequence from the stored snapshot.
    ///
    /// A missing slot yields an empty log. A corrupt or unparsable snapshot
    /// is logged and also yields an empty log; bad stored state must never
    /// take down startup.
    pub fn load(&self) -> Result<Vec<Workout>> {
        let raw = match self.store.get_item(keys::WORKOUTS)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let snapshots: Vec<WorkoutSnapshot> = match serde_json::from_str(&raw) {
            Ok(snapshots) => snapshots,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring corrupt workout snapshot");
                return Ok(Vec::new());
            }
        };

        Ok(snapshots.into_iter().map(WorkoutSnapshot::replay).collect())
    }

    /// Remove the durable snapshot entirely.
    pub fn purge(&mut self) -> Result<()> {
        self.store.remove_item(keys::WORKOUTS)
    }
}
