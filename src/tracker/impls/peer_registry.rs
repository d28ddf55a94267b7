use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use log::debug;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::host::Host;
use crate::tracker::structs::host_key::HostKey;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::locality_table::LocalityTable;
use crate::tracker::structs::peer_registry::PeerRegistry;
use crate::tracker::structs::peer_selector::PeerSelector;
use crate::tracker::structs::scrape_counts::ScrapeCounts;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
use crate::tracker::types::RankedPeers;

impl PeerRegistry {
    pub fn new(locality: LocalityTable) -> PeerRegistry
    {
        PeerRegistry {
            locality,
            hosts: BTreeMap::new(),
            swarms: BTreeMap::new(),
        }
    }

    /// Records `stat` for `(ip, port)` in the `info_hash` swarm, creating the
    /// host and the swarm as needed. Returns the host as stored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn upsert(&mut self, ip: Ipv4Addr, port: u16, info_hash: InfoHash, stat: SwarmPeerStat) -> Host
    {
        let host_key = HostKey::new(ip, port);
        let locality = &self.locality;

        let host = self.hosts.entry(host_key).or_insert_with(|| {
            debug!("[REGISTRY] New host {}:{} (key {})", ip, port, host_key);
            Host::new(ip, port, locality)
        });
        host.add_swarm(info_hash);
        let host = host.clone();

        self.swarms.entry(info_hash)
            .or_default()
            .entry(host_key)
            .and_modify(|existing| existing.update(&stat))
            .or_insert(stat);

        host
    }

    /// Withdraws `(ip, port)` from every swarm it is in and forgets the host.
    ///
    /// Unknown endpoints yield a fresh host value that is not inserted.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, ip: Ipv4Addr, port: u16) -> Host
    {
        let host_key = HostKey::new(ip, port);

        let Some(host) = self.hosts.remove(&host_key) else {
            return Host::new(ip, port, &self.locality);
        };

        for info_hash in host.swarms.iter() {
            if let Some(peers) = self.swarms.get_mut(info_hash) {
                peers.remove(&host_key);
                if peers.is_empty() {
                    debug!("[REGISTRY] Swarm {} is empty, removing", info_hash);
                    self.swarms.remove(info_hash);
                }
            }
        }

        host
    }

    /// Ranked peers of `info_hash` for `requester`, never including the requester.
    pub fn peers_for(&self, requester: &Host, info_hash: &InfoHash) -> RankedPeers
    {
        match self.swarms.get(info_hash) {
            None => Vec::new(),
            Some(swarm) => PeerSelector::rank(requester, swarm, &self.hosts),
        }
    }

    pub fn scrape_counts(&self, info_hash: &InfoHash) -> ScrapeCounts
    {
        let Some(swarm) = self.swarms.get(info_hash) else {
            return ScrapeCounts::default();
        };

        swarm.values().fold(ScrapeCounts::default(), |mut counts, stat| {
            if stat.left == 0 {
                counts.complete += 1;
            } else {
                counts.incomplete += 1;
            }
            if stat.event == AnnounceEvent::Completed {
                counts.downloaded += 1;
            }
            counts
        })
    }

    pub fn host(&self, ip: Ipv4Addr, port: u16) -> Option<&Host>
    {
        self.hosts.get(&HostKey::new(ip, port))
    }

    pub fn hosts_count(&self) -> usize
    {
        self.hosts.len()
    }

    pub fn swarms_count(&self) -> usize
    {
        self.swarms.len()
    }
}
