use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use log::info;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::locality_table::LocalityTable;
use crate::tracker::structs::peer_registry::PeerRegistry;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        let locality = LocalityTable::new(config.tracker_config.locality.clone());
        info!("[BOOT] Locality table loaded with {} rules, furthest weight {}", locality.rules.len(), locality.furthest);

        TorrentTracker {
            config: config.clone(),
            registry: Arc::new(RwLock::new(PeerRegistry::new(locality))),
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                hosts: AtomicI64::new(0),
                swarms: AtomicI64::new(0),
                announces_handled: AtomicI64::new(0),
                stops_handled: AtomicI64::new(0),
                scrapes_handled: AtomicI64::new(0),
                requests_rejected: AtomicI64::new(0),
                not_found: AtomicI64::new(0),
            }),
        }
    }
}
