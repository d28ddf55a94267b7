//! HTTP tracker transport.
//!
//! Translates HTTP GET requests into calls on the tracker core and encodes
//! the results as bencoded bodies.
//!
//! # Supported Endpoints
//!
//! - `/announce` - Register a peer and receive ranked peers
//! - `/scrape` - Query swarm counters for one or more info-hashes
//! - `/stats` - Tracker counters as JSON
//! - `/info` - Registry snapshot as JSON
//!
//! Anything else answers 404 with a bencoded failure reason.
//!
//! # Response Format
//!
//! Successful tracker responses are bencoded dictionaries served as
//! `text/plain`. Validation failures answer 400 with both a
//! `failure code` and a `failure reason`.

/// Data structures shared with the request handlers.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
