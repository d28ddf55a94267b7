//! Enumerations for tracker operations.

/// Announce `event` values.
pub mod announce_event;

/// Announce validation errors with protocol failure codes.
pub mod tracker_error;
