use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use crate::tracker::structs::host::Host;
use crate::tracker::structs::host_key::HostKey;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::locality_table::LocalityTable;

impl Host {
    pub fn new(ip: Ipv4Addr, port: u16, locality: &LocalityTable) -> Host
    {
        Host {
            ip,
            port,
            key: HostKey::new(ip, port),
            location_weight: locality.weight_of(ip),
            last_update: std::time::Instant::now(),
            swarms: BTreeSet::new(),
        }
    }

    pub fn add_swarm(&mut self, info_hash: InfoHash)
    {
        self.swarms.insert(info_hash);
        self.last_update = std::time::Instant::now();
    }

    pub fn location_distance(&self, other: &Host) -> u32
    {
        self.location_weight.abs_diff(other.location_weight)
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Host {}
