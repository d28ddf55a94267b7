use crate::tracker::enums::announce_event::AnnounceEvent;

/// Transfer state one host reported for one swarm.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SwarmPeerStat {
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
    pub last_update: std::time::Instant,
}
