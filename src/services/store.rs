// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory session store, the single source of truth for the UI.
//!
//! Ordered by insertion, append-only from the UI's perspective. Every
//! mutation is mirrored to durable storage through the persistence
//! adapter before the next event is processed.

use crate::error::Result;
use crate::models::{Workout, WorkoutId};
use crate::services::PersistenceAdapter;

/// Ordered collection of workouts for the current session.
pub struct SessionStore {
    workouts: Vec<Workout>,
    persistence: PersistenceAdapter,
}

impl SessionStore {
    /// Create an empty store over the given adapter.
    pub fn new(persistence: PersistenceAdapter) -> Self {
        Self {
            workouts: Vec::new(),
            persistence,
        }
    }

    /// Rebuild the collection wholesale from the durable snapshot.
    ///
    /// Any read failure degrades to an empty store; startup never fails on
    /// bad stored state.
    pub fn rehydrate(&mut self) {
        self.workouts = match self.persistence.load() {
            Ok(workouts) => workouts,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load workout snapshot, starting empty");
                Vec::new()
            }
        };
        tracing::info!(count = self.workouts.len(), "Session store rehydrated");
    }

    /// Append a workout and mirror the full log to durable storage.
    ///
    /// The in-memory append holds even if the mirror write fails; the error
    /// is propagated so the host can surface it.
    pub fn append(&mut self, workout: Workout) -> Result<()> {
        let id = workout.id();
        self.workouts.push(workout);
        tracing::debug!(workout_id = %id, count = self.workouts.len(), "Workout appended");
        self.persistence.save(&self.workouts)
    }

    /// Look up a workout by id.
    pub fn find_by_id(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Read-only view of the full log, in insertion order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Empty the collection and purge the durable snapshot.
    pub fn reset(&mut self) -> Result<()> {
        self.workouts.clear();
        tracing::info!("Session store reset");
        self.persistence.purge()
    }
}
