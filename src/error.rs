// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid workout input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Rejection of a submitted workout form.
///
/// Validation is all-or-nothing: the first failing field rejects the whole
/// submission and nothing is constructed. The message is what gets shown
/// to the user via the form surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is not a number")]
    NotANumber(&'static str),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} must be positive")]
    NotPositive(&'static str),

    #[error("cadence must be a whole number of steps per minute")]
    FractionalCadence,

    #[error("elevation gain cannot be negative")]
    NegativeElevation,

    #[error("unknown workout type: {0}")]
    UnknownKind(String),

    #[error("coordinates ({lat}, {lng}) are outside geographic range")]
    CoordinatesOutOfRange { lat: f64, lng: f64 },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
