//! Statistics enumerations.

/// Counter selector for `update_stats`/`set_stats`.
pub mod stats_event;
