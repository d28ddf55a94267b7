use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_registry::PeerRegistry;

/// The tracker service: configuration, the shared registry and counters.
///
/// The registry sits behind a single `RwLock`; announces take the write
/// side for both the mutation and the peer selection that follows it.
#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub registry: Arc<RwLock<PeerRegistry>>,
    pub stats: Arc<StatsAtomics>,
}
