//! Type aliases for the tracker module.

use std::collections::{BTreeMap, HashMap};
use crate::tracker::structs::host::Host;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_counts::ScrapeCounts;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;

/// Decoded query string: lower-cased key to every raw value given for it.
pub type QueryMap = HashMap<String, Vec<Vec<u8>>>;

/// Peer selection result, best candidate first.
pub type RankedPeers = Vec<(Host, SwarmPeerStat)>;

/// Scrape reply keyed by info-hash.
pub type ScrapeResponse = BTreeMap<InfoHash, ScrapeCounts>;
