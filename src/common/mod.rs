//! Common utilities and shared functionality.
//!
//! - Query string parsing into raw byte values
//! - Logging setup
//! - Timestamp helpers
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::common::common::parse_query;
//!
//! let query = parse_query(Some(String::from("port=6881&event=started"))).unwrap();
//! assert_eq!(query.get("port"), Some(&vec![b"6881".to_vec()]));
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
