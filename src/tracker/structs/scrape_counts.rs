use serde::Serialize;

/// Swarm-wide counters returned by scrape.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ScrapeCounts {
    /// Peers reporting nothing left to download.
    pub complete: u64,
    /// Peers whose last event was `completed`.
    pub downloaded: u64,
    /// Peers with bytes still left.
    pub incomplete: u64,
}
