use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;

/// Point-in-time copy of the registry for status reporting.
#[derive(Serialize, Clone, Debug, Default)]
pub struct TrackerSnapshot {
    pub hosts: Vec<HostSnapshot>,
    pub swarms: Vec<SwarmSnapshot>,
}

#[derive(Serialize, Clone, Debug)]
pub struct HostSnapshot {
    pub ip: String,
    pub port: u16,
    pub key: u64,
    pub location_weight: u32,
    pub swarms: usize,
    pub updated_secs_ago: u64,
}

#[derive(Serialize, Clone, Debug)]
pub struct SwarmSnapshot {
    pub info_hash: InfoHash,
    pub peers: Vec<SwarmPeerSnapshot>,
}

#[derive(Serialize, Clone, Debug)]
pub struct SwarmPeerSnapshot {
    pub ip: String,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: String,
    pub updated_secs_ago: u64,
}
