// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interaction controller: the application state machine.
//!
//! Owns the session store and drives the host surfaces in reaction to
//! discrete external events, delivered one at a time by the host event
//! loop. Two states: `Idle` (no pending placement) and
//! `AwaitingSubmission` (a map location was chosen and the form is open).

use crate::config::Config;
use crate::error::Result;
use crate::models::{LatLng, WorkoutId};
use crate::services::{SessionStore, WorkoutFactory};
use crate::surface::{
    FormSurface, GeolocationFailure, GeolocationSource, MapWidget, RawWorkoutForm,
};

/// Placement state of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    /// No pending placement; form submissions are ignored.
    Idle,
    /// A map location was chosen; the form is open for it.
    AwaitingSubmission { coords: LatLng },
}

/// Whether the map surface can accept rendering yet.
///
/// The map loads only once the initial geolocation fix arrives; a failed
/// fix leaves the controller idle for the rest of the session (no retry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapAvailability {
    Pending,
    Ready,
    Failed,
}

/// Event-driven orchestrator over the store and host surfaces.
pub struct Controller<G, M, F>
where
    G: GeolocationSource,
    M: MapWidget,
    F: FormSurface,
{
    config: Config,
    store: SessionStore,
    geolocation: G,
    map: M,
    form: F,
    state: ControllerState,
    map_availability: MapAvailability,
}

impl<G, M, F> Controller<G, M, F>
where
    G: GeolocationSource,
    M: MapWidget,
    F: FormSurface,
{
    pub fn new(config: Config, store: SessionStore, geolocation: G, map: M, form: F) -> Self {
        Self {
            config,
            store,
            geolocation,
            map,
            form,
            state: ControllerState::Idle,
            map_availability: MapAvailability::Pending,
        }
    }

    /// Startup: rehydrate the store, render the existing log, then issue
    /// the single-shot position request. Runs before any other event.
    ///
    /// Markers are rendered later, once the map is available
    /// (see [`Controller::on_position`]).
    pub fn bootstrap(&mut self) {
        self.store.rehydrate();
        for workout in self.store.all() {
            self.form.render_entry(workout);
        }
        self.geolocation.request_position();
    }

    /// Outcome of the position request issued at bootstrap.
    ///
    /// Success centers the map on the user and renders a marker for every
    /// stored workout. Failure is reported to the user and permanently
    /// parks the controller in `Idle` for this session.
    pub fn on_position(&mut self, position: std::result::Result<LatLng, GeolocationFailure>) {
        match position {
            Ok(coords) => {
                self.map_availability = MapAvailability::Ready;
                self.map.center_on(coords, self.config.map_zoom_level);
                for workout in self.store.all() {
                    self.map.render_marker(workout.coords(), workout.description());
                }
                tracing::info!(
                    lat = coords.lat,
                    lng = coords.lng,
                    markers = self.store.len(),
                    "Map centered on current position"
                );
            }
            Err(failure) => {
                self.map_availability = MapAvailability::Failed;
                tracing::warn!(error = %failure, "Geolocation request failed");
                self.form
                    .show_error(&format!("Could not get your position: {}", failure));
            }
        }
    }

    /// The user picked a point on the map: capture it and open the form.
    ///
    /// A second pick while the form is already open re-targets the pending
    /// placement. Picks before the map is ready (or after a geolocation
    /// failure) are ignored.
    pub fn on_location_chosen(&mut self, coords: LatLng) {
        if self.map_availability != MapAvailability::Ready {
            tracing::debug!("Location chosen before map is available, ignoring");
            return;
        }

        self.state = ControllerState::AwaitingSubmission { coords };
        self.form.show();
    }

    /// The user submitted the workout form.
    ///
    /// Valid input: append to the store, render marker and list entry, hide
    /// the form, return to `Idle`. Invalid input: show the error and stay
    /// in `AwaitingSubmission` with the form open. Submissions while `Idle`
    /// are ignored (the form cannot be shown before a location is chosen).
    pub fn on_form_submitted(&mut self, fields: RawWorkoutForm) -> Result<()> {
        let coords = match self.state {
            ControllerState::AwaitingSubmission { coords } => coords,
            ControllerState::Idle => {
                tracing::debug!("Form submitted while idle, ignoring");
                return Ok(());
            }
        };

        match WorkoutFactory::from_form(coords, &fields) {
            Ok(workout) => {
                self.map
                    .render_marker(workout.coords(), workout.description());
                self.form.render_entry(&workout);
                self.form.hide();
                self.state = ControllerState::Idle;
                tracing::info!(
                    workout_id = %workout.id(),
                    kind = %workout.kind(),
                    "Workout logged"
                );
                self.store.append(workout)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected workout submission");
                self.form.show_error(&e.to_string());
                Ok(())
            }
        }
    }

    /// The user dismissed the form without submitting.
    pub fn on_form_cancelled(&mut self) {
        if self.state == ControllerState::Idle {
            return;
        }
        self.form.hide();
        self.state = ControllerState::Idle;
    }

    /// The user clicked a rendered log entry: center the map on its marker.
    /// Unknown ids are a no-op.
    pub fn on_entry_clicked(&mut self, id: WorkoutId) {
        match self.store.find_by_id(id) {
            Some(workout) => {
                let coords = workout.coords();
                self.map.center_on(coords, self.config.map_zoom_level);
            }
            None => {
                tracing::debug!(workout_id = %id, "Click on unknown workout entry, ignoring");
            }
        }
    }

    /// Full reset: empty the store and purge durable storage.
    pub fn reset(&mut self) -> Result<()> {
        self.state = ControllerState::Idle;
        self.store.reset()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn geolocation(&self) -> &G {
        &self.geolocation
    }
}
