use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;

impl SwarmPeerStat {
    pub fn new(uploaded: u64, downloaded: u64, left: u64, event: AnnounceEvent) -> SwarmPeerStat
    {
        SwarmPeerStat {
            uploaded,
            downloaded,
            left,
            event,
            last_update: std::time::Instant::now(),
        }
    }

    /// Overwrites every reported field and refreshes the timestamp.
    pub fn update(&mut self, other: &SwarmPeerStat)
    {
        self.uploaded = other.uploaded;
        self.downloaded = other.downloaded;
        self.left = other.left;
        self.event = other.event;
        self.last_update = std::time::Instant::now();
    }

    pub fn is_finished(&self) -> bool
    {
        self.left == 0 || self.event == AnnounceEvent::Completed
    }
}
