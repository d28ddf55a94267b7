use std::collections::BTreeMap;
use crate::tracker::structs::host::Host;
use crate::tracker::structs::host_key::HostKey;
use crate::tracker::structs::peer_selector::PeerSelector;
use crate::tracker::structs::peer_sort_key::PeerSortKey;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
use crate::tracker::types::RankedPeers;

impl PeerSelector {
    /// Orders `swarm` for `requester`, leaving the requester out.
    ///
    /// Members without a host entry are skipped; the registry never
    /// produces them.
    #[tracing::instrument(level = "debug", skip(swarm, hosts))]
    pub fn rank(requester: &Host, swarm: &BTreeMap<HostKey, SwarmPeerStat>, hosts: &BTreeMap<HostKey, Host>) -> RankedPeers
    {
        let maxima = Self::maxima(swarm);

        let mut candidates: Vec<(PeerSortKey, &Host, &SwarmPeerStat)> = swarm.iter()
            .filter(|(host_key, _)| **host_key != requester.key)
            .filter_map(|(host_key, stat)| {
                hosts.get(host_key).map(|host| (Self::sort_key(requester, host, stat, maxima), host, stat))
            })
            .collect();

        candidates.sort_by_key(|(sort_key, _, _)| *sort_key);

        candidates.into_iter()
            .map(|(_, host, stat)| (host.clone(), stat.clone()))
            .collect()
    }

    pub fn sort_key(requester: &Host, host: &Host, stat: &SwarmPeerStat, (max_uploaded, max_downloaded, max_left): (u64, u64, u64)) -> PeerSortKey
    {
        PeerSortKey {
            finished_flag: if stat.is_finished() { 0 } else { 1 },
            left_decile: Self::decile(stat.left, max_left),
            location_distance: host.location_distance(requester),
            host_key: host.key,
            upload_decile: Self::decile(stat.uploaded, max_uploaded),
            download_decile: Self::decile(stat.downloaded, max_downloaded),
        }
    }

    /// Largest uploaded, downloaded and left across the swarm, each at least 1.
    pub fn maxima(swarm: &BTreeMap<HostKey, SwarmPeerStat>) -> (u64, u64, u64)
    {
        swarm.values().fold((1, 1, 1), |(uploaded, downloaded, left), stat| {
            (uploaded.max(stat.uploaded), downloaded.max(stat.downloaded), left.max(stat.left))
        })
    }

    /// `floor(value / max * 10)`, computed without floating point.
    pub fn decile(value: u64, max: u64) -> u64
    {
        ((u128::from(value) * 10) / u128::from(max.max(1))) as u64
    }
}
