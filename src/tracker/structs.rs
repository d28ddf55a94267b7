//! Data structures for tracker operations.

/// A validated announce request.
pub mod announce_query_request;

/// One `{ip, port}` entry of an announce reply.
pub mod announce_peer;

/// Announce reply record.
pub mod announce_response;

/// Tracked peer endpoint.
pub mod host;

/// Composite IPv4 + port key.
pub mod host_key;

/// 20-byte torrent identifier.
pub mod info_hash;

/// A single locality prefix rule.
pub mod locality_rule;

/// Ordered locality rules.
pub mod locality_table;

/// 20-byte client identifier.
pub mod peer_id;

/// Hosts and per-swarm peer statistics.
pub mod peer_registry;

/// Peer ranking.
pub mod peer_selector;

/// Ranking key used by the selector.
pub mod peer_sort_key;

/// Swarm-wide scrape counters.
pub mod scrape_counts;

/// A parsed scrape request.
pub mod scrape_query_request;

/// Per-swarm transfer state of one host.
pub mod swarm_peer_stat;

/// The tracker service instance.
pub mod torrent_tracker;

/// Serializable registry copy for status output.
pub mod tracker_snapshot;
