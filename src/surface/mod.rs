// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Host surfaces the interaction controller drives.
//!
//! Geolocation, the map widget, and the form/list surface are thin wrappers
//! over a host platform. The controller talks to them only through these
//! traits; the host wires its event sources (map clicks, form submission)
//! to the controller's event methods.

pub mod form;
pub mod geolocation;
pub mod map;

pub use form::{FormSurface, RawWorkoutForm};
pub use geolocation::{GeolocationFailure, GeolocationSource};
pub use map::MapWidget;
