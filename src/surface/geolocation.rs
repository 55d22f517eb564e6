// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geolocation collaborator.

/// Why a position request failed. Surfaced to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationFailure {
    #[error("position access denied")]
    Denied,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Single-shot position source.
///
/// `request_position` is fire-and-forget; the host delivers the outcome
/// later as a [`Controller::on_position`](crate::services::Controller::on_position)
/// event. At most one request is in flight per session.
pub trait GeolocationSource {
    fn request_position(&mut self);
}
