//! # Swarm Tracker
//!
//! A locality-aware BitTorrent tracker built on Actix-web.
//!
//! ## Overview
//!
//! Peers announce themselves per info-hash and receive a ranked list of
//! other peers in the same swarm. Ranking prefers finished peers, then
//! peers closer to completion and topologically closer by the configured
//! locality table, with a deterministic tie-break. All state lives in
//! memory and is lost on restart.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use std::sync::Arc;
//! use swarm_tracker::common::common::parse_query;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let query = parse_query(Some(String::from(
//!     "info_hash=aaaaaaaaaaaaaaaaaaaa&peer_id=-XX0001-000000000000&port=6881&left=0"
//! ))).unwrap();
//! let response = tracker.announce(Ipv4Addr::new(10, 0, 0, 1), &query).unwrap();
//! assert!(response.peers.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, logging setup and shared errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker transport
//! - [`stats`] - Runtime counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Peer registry, peer selection and request handling

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration.
pub mod config;

/// HTTP tracker protocol implementation.
pub mod http;

/// Real-time statistics tracking.
pub mod stats;

/// CLI argument structures.
pub mod structs;

/// Core tracker logic.
///
/// Contains the peer registry, locality table, peer selector and the
/// announce/scrape handlers.
pub mod tracker;
