// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map widget collaborator.

use crate::models::LatLng;

/// Interactive map the controller renders onto.
///
/// "Location chosen" events (the user picking a point on the map) are wired
/// by the host to [`Controller::on_location_chosen`](crate::services::Controller::on_location_chosen).
pub trait MapWidget {
    /// Place a marker with a popup label at the given coordinates.
    fn render_marker(&mut self, coords: LatLng, label: &str);

    /// Pan/zoom the viewport to the given coordinates.
    fn center_on(&mut self, coords: LatLng, zoom: u8);
}
