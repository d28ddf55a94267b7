//! Configuration management module.
//!
//! Loads the tracker configuration from a TOML file (`config.toml` by
//! default) and validates it before anything is started.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging verbosity and how
//!   often the `[STATS]` line is printed
//! - **tracker_config**: announce interval, default `numwant` and the
//!   ordered locality rules
//! - **http_server**: one entry per HTTP listener
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
