// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout form and list surface collaborator.

use crate::models::Workout;

/// Raw field values read from the workout form, exactly as entered.
///
/// Parsing and validation happen in the factory; the surface does no
/// interpretation of its own.
#[derive(Debug, Clone, Default)]
pub struct RawWorkoutForm {
    /// Selected workout type ("running" or "cycling")
    pub kind: String,
    /// Distance field, kilometers
    pub distance: String,
    /// Duration field, minutes
    pub duration: String,
    /// Cadence field, steps/min (running only)
    pub cadence: String,
    /// Elevation gain field, meters (cycling only)
    pub elevation: String,
}

/// Form/list surface.
///
/// Submission and cancellation events are wired by the host to
/// [`Controller::on_form_submitted`](crate::services::Controller::on_form_submitted)
/// and [`Controller::on_form_cancelled`](crate::services::Controller::on_form_cancelled),
/// carrying the [`RawWorkoutForm`] read from the fields.
pub trait FormSurface {
    /// Show the entry form for a pending placement.
    fn show(&mut self);

    /// Hide the form and clear its fields.
    fn hide(&mut self);

    /// Render one workout into the log list.
    fn render_entry(&mut self, workout: &Workout);

    /// Surface a user-facing error message (validation, geolocation).
    fn show_error(&mut self, message: &str);
}
