use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use crate::tracker::structs::host_key::HostKey;
use crate::tracker::structs::info_hash::InfoHash;

/// A tracked peer endpoint.
///
/// Identity is the derived [`HostKey`]; two hosts compare equal when their
/// keys do, regardless of timestamps or swarm membership.
#[derive(Clone, Debug)]
pub struct Host {
    pub ip: Ipv4Addr,
    pub port: u16,
    pub key: HostKey,
    /// Locality weight, resolved once when the host is first seen.
    pub location_weight: u32,
    pub last_update: std::time::Instant,
    /// Info-hashes this host currently participates in.
    pub swarms: BTreeSet<InfoHash>,
}
