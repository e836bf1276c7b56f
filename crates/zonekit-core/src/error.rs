//! Error handling for ZoneKit
//!
//! Provides error types for every layer of the zone subsystem:
//! - Validation errors (user-correctable form input)
//! - Malformed zone errors (persisted data that failed normalization)
//! - Editor errors (state machine misuse, lookups, save interlock)
//! - Persistence errors (external store-configuration service)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::fmt;
use thiserror::Error;

/// A user-editable zone field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneField {
    /// Display label
    Name,
    /// Delivery fee amount
    DeliveryFee,
    /// Circle radius in metres
    Radius,
    /// Polygon vertices
    Coordinates,
}

impl fmt::Display for ZoneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::DeliveryFee => write!(f, "deliveryFee"),
            Self::Radius => write!(f, "radius"),
            Self::Coordinates => write!(f, "coordinates"),
        }
    }
}

/// Validation error
///
/// Raised when a draft cannot be committed. Lists every offending field so
/// the form can highlight all of them at once.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid zone: {}", join_fields(.fields))]
pub struct ValidationError {
    /// Fields that failed validation, in form order.
    pub fields: Vec<ZoneField>,
}

impl ValidationError {
    /// Returns true if the given field is listed.
    pub fn has(&self, field: ZoneField) -> bool {
        self.fields.contains(&field)
    }
}

fn join_fields(fields: &[ZoneField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Malformed zone error
///
/// Persisted zone data that could not be normalized into the canonical form.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Malformed zone '{zone_id}': {reason}")]
pub struct MalformedZoneError {
    /// Identifier of the offending record (may be empty when the id itself is missing).
    pub zone_id: String,
    /// What was wrong with the record.
    pub reason: String,
}

impl MalformedZoneError {
    pub fn new(zone_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            reason: reason.into(),
        }
    }
}

/// Persistence error type
///
/// Failures reported by the external store-configuration service.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The store rejected or failed to write the zone set
    #[error("Failed to save zones: {reason}")]
    SaveFailed {
        /// The reason the save failed.
        reason: String,
    },

    /// The store could not produce the zone set
    #[error("Failed to load zones: {reason}")]
    LoadFailed {
        /// The reason the load failed.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Editor error type
///
/// Represents errors raised by the zone editor state machine.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Draft failed validation; the edit stays open
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No zone with the given id
    #[error("Zone not found: {zone_id}")]
    ZoneNotFound {
        /// The missing zone id.
        zone_id: String,
    },

    /// Operation is not valid in the current interaction state
    #[error("Invalid state transition from {current} to {requested}")]
    InvalidStateTransition {
        /// The current state name.
        current: String,
        /// The requested state name.
        requested: String,
    },

    /// Operation requires a different shape type
    #[error("Zone {zone_id} is not a {expected} zone")]
    ShapeMismatch {
        /// The zone id.
        zone_id: String,
        /// The shape type the operation requires.
        expected: String,
    },

    /// Zone is not the one currently being edited
    #[error("Zone {zone_id} is not being edited")]
    NotEditing {
        /// The zone id.
        zone_id: String,
    },

    /// A save is in flight; edits are disabled until it resolves
    #[error("A save is in progress; edits are disabled until it completes")]
    SaveInFlight,

    /// The external save failed; the zone set is unchanged
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
