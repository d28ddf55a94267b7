//! Implementation blocks for tracker data structures.

pub mod announce_event;
pub mod host;
pub mod host_key;
pub mod info_hash;
pub mod locality_table;
pub mod peer_id;
pub mod peer_registry;
pub mod peer_selector;
pub mod swarm_peer_stat;
pub mod torrent_tracker;
pub mod torrent_tracker_handlers;
pub mod torrent_tracker_peers;
pub mod tracker_error;
