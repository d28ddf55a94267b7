use std::net::Ipv4Addr;
use std::time::Instant;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::host::Host;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_registry::PeerRegistry;
use crate::tracker::structs::scrape_counts::ScrapeCounts;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracker_snapshot::{HostSnapshot, SwarmPeerSnapshot, SwarmSnapshot, TrackerSnapshot};
use crate::tracker::types::RankedPeers;

impl TorrentTracker {
    pub fn add_host_peer(&self, ip: Ipv4Addr, port: u16, info_hash: InfoHash, stat: SwarmPeerStat) -> Host
    {
        let mut registry = self.registry.write();
        let host = registry.upsert(ip, port, info_hash, stat);
        self.refresh_registry_stats(&registry);
        host
    }

    pub fn remove_host(&self, ip: Ipv4Addr, port: u16) -> Host
    {
        let mut registry = self.registry.write();
        let host = registry.remove(ip, port);
        self.refresh_registry_stats(&registry);
        host
    }

    pub fn get_host(&self, ip: Ipv4Addr, port: u16) -> Option<Host>
    {
        self.registry.read().host(ip, port).cloned()
    }

    pub fn get_peers(&self, requester: &Host, info_hash: &InfoHash) -> RankedPeers
    {
        self.registry.read().peers_for(requester, info_hash)
    }

    pub fn get_scrape_counts(&self, info_hash: &InfoHash) -> ScrapeCounts
    {
        self.registry.read().scrape_counts(info_hash)
    }

    pub(crate) fn refresh_registry_stats(&self, registry: &PeerRegistry)
    {
        self.set_stats(StatsEvent::Hosts, registry.hosts_count() as i64);
        self.set_stats(StatsEvent::Swarms, registry.swarms_count() as i64);
    }

    /// Consistent copy of every host and swarm, hosts ordered by key.
    pub fn snapshot(&self) -> TrackerSnapshot
    {
        let registry = self.registry.read();
        let now = Instant::now();

        let hosts = registry.hosts.values().map(|host| HostSnapshot {
            ip: host.ip.to_string(),
            port: host.port,
            key: host.key.0,
            location_weight: host.location_weight,
            swarms: host.swarms.len(),
            updated_secs_ago: now.saturating_duration_since(host.last_update).as_secs(),
        }).collect();

        let swarms = registry.swarms.iter().map(|(info_hash, peers)| SwarmSnapshot {
            info_hash: *info_hash,
            peers: peers.iter()
                .filter_map(|(host_key, stat)| registry.hosts.get(host_key).map(|host| SwarmPeerSnapshot {
                    ip: host.ip.to_string(),
                    port: host.port,
                    uploaded: stat.uploaded,
                    downloaded: stat.downloaded,
                    left: stat.left,
                    event: stat.event.to_string(),
                    updated_secs_ago: now.saturating_duration_since(stat.last_update).as_secs(),
                }))
                .collect(),
        }).collect();

        TrackerSnapshot { hosts, swarms }
    }
}
