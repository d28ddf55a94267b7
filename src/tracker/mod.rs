//! Core tracker: swarm membership, peer ranking, announce and scrape.
//!
//! # Architecture
//!
//! - [`structs::peer_registry::PeerRegistry`] holds every known host and, per
//!   info-hash, each member's last reported transfer state.
//! - [`structs::peer_selector::PeerSelector`] ranks a swarm for one requester:
//!   finished peers first, then by bytes left, locality distance, host key and
//!   transfer deciles.
//! - [`structs::locality_table::LocalityTable`] turns an address into the
//!   proximity weight used by the ranking.
//! - [`structs::torrent_tracker::TorrentTracker`] owns the registry behind a
//!   `RwLock` and exposes the announce and scrape operations.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::net::Ipv4Addr;
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let mut query = HashMap::new();
//! query.insert(String::from("peer_id"), vec![b"-XX0001-000000000000".to_vec()]);
//! query.insert(String::from("port"), vec![b"6881".to_vec()]);
//! query.insert(String::from("info_hash"), vec![b"AAAAAAAAAAAAAAAAAAAA".to_vec()]);
//!
//! let response = tracker.announce(Ipv4Addr::new(10, 0, 0, 1), &query).unwrap();
//! assert!(response.peers.is_empty());
//! ```

/// Enumerations for announce events and validation errors.
pub mod enums;

/// Implementation blocks for tracker data structures.
pub mod impls;

/// Tracker data structures.
pub mod structs;

/// Type aliases shared by the tracker.
pub mod types;

/// Unit tests for the registry, selector and handlers.
pub mod tests;
