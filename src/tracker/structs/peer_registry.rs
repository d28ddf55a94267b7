use std::collections::BTreeMap;
use crate::tracker::structs::host::Host;
use crate::tracker::structs::host_key::HostKey;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::locality_table::LocalityTable;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;

/// Swarm membership table.
///
/// A key is present in `swarms[h]` exactly when `h` is in `hosts[key].swarms`,
/// and a swarm entry never outlives its last member.
#[derive(Debug, Clone, Default)]
pub struct PeerRegistry {
    pub locality: LocalityTable,
    pub hosts: BTreeMap<HostKey, Host>,
    pub swarms: BTreeMap<InfoHash, BTreeMap<HostKey, SwarmPeerStat>>,
}
