// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Maptrack workout log report.
//!
//! Rehydrates the workout log from the configured snapshot file and prints
//! a summary of every recorded workout. The interactive surfaces (map,
//! form, geolocation) are host-provided in a real deployment; this binary
//! is the offline view over the durable log.

use maptrack::config::Config;
use maptrack::services::PersistenceAdapter;
use maptrack::storage::FileStore;
use maptrack::time_utils;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        path = %config.storage_path.display(),
        "Opening workout storage"
    );

    // Rehydrate the log through the persistence adapter
    let store = FileStore::open(&config.storage_path)?;
    let adapter = PersistenceAdapter::new(Box::new(store));
    let workouts = adapter.load()?;
    tracing::info!(count = workouts.len(), "Workout log rehydrated");

    let mut total_distance_km = 0.0;
    for workout in &workouts {
        total_distance_km += workout.distance_km();
        tracing::info!(
            workout_id = %workout.id(),
            kind = %workout.kind(),
            created_at = %time_utils::format_utc_rfc3339(workout.created_at()),
            description = workout.description(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            derived_metric = workout.derived_metric(),
            "Workout"
        );
    }

    tracing::info!(
        workouts = workouts.len(),
        total_distance_km,
        "Workout log summary"
    );
    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("maptrack=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
