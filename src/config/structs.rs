//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP server configuration.
pub mod http_trackers_config;

/// Core tracker settings (interval, numwant, locality).
pub mod tracker_config;
