// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: recording surface doubles and controller builders.

use std::path::Path;

use maptrack::config::Config;
use maptrack::models::{LatLng, Workout, WorkoutId};
use maptrack::services::{Controller, PersistenceAdapter, SessionStore};
use maptrack::storage::{FileStore, MemoryStore};
use maptrack::surface::{FormSurface, GeolocationSource, MapWidget, RawWorkoutForm};

/// Geolocation double that counts requests.
#[derive(Default)]
pub struct StubGeolocation {
    pub requests: usize,
}

impl GeolocationSource for StubGeolocation {
    fn request_position(&mut self) {
        self.requests += 1;
    }
}

/// Map double recording every marker and centering call.
#[derive(Default)]
pub struct RecordingMap {
    pub markers: Vec<(LatLng, String)>,
    pub centered: Vec<(LatLng, u8)>,
}

impl MapWidget for RecordingMap {
    fn render_marker(&mut self, coords: LatLng, label: &str) {
        self.markers.push((coords, label.to_string()));
    }

    fn center_on(&mut self, coords: LatLng, zoom: u8) {
        self.centered.push((coords, zoom));
    }
}

/// Form double recording rendered entries and surfaced errors.
#[derive(Default)]
pub struct RecordingForm {
    pub visible: bool,
    pub entries: Vec<(WorkoutId, String)>,
    pub errors: Vec<String>,
}

impl FormSurface for RecordingForm {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn render_entry(&mut self, workout: &Workout) {
        self.entries
            .push((workout.id(), workout.description().to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

pub type TestController = Controller<StubGeolocation, RecordingMap, RecordingForm>;

/// Controller over a fresh in-memory substrate.
#[allow(dead_code)]
pub fn memory_controller() -> TestController {
    let adapter = PersistenceAdapter::new(Box::new(MemoryStore::new()));
    let store = SessionStore::new(adapter);
    Controller::new(
        Config::default(),
        store,
        StubGeolocation::default(),
        RecordingMap::default(),
        RecordingForm::default(),
    )
}

/// Controller over a file substrate at `path` (shared across instances to
/// simulate a restart).
#[allow(dead_code)]
pub fn file_controller(path: &Path) -> TestController {
    let file_store = FileStore::open(path).expect("open file store");
    let adapter = PersistenceAdapter::new(Box::new(file_store));
    let store = SessionStore::new(adapter);
    Controller::new(
        Config::default(),
        store,
        StubGeolocation::default(),
        RecordingMap::default(),
        RecordingForm::default(),
    )
}

/// Bootstrap a controller and deliver a successful position fix so the map
/// is ready for location events.
#[allow(dead_code)]
pub fn boot_with_position(controller: &mut TestController, position: LatLng) {
    controller.bootstrap();
    controller.on_position(Ok(position));
}

/// Raw form for a running workout.
#[allow(dead_code)]
pub fn running_form(distance: &str, duration: &str, cadence: &str) -> RawWorkoutForm {
    RawWorkoutForm {
        kind: "running".to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: cadence.to_string(),
        elevation: String::new(),
    }
}

/// Raw form for a cycling workout.
#[allow(dead_code)]
pub fn cycling_form(distance: &str, duration: &str, elevation: &str) -> RawWorkoutForm {
    RawWorkoutForm {
        kind: "cycling".to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: String::new(),
        elevation: elevation.to_string(),
    }
}
