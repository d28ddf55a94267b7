use serde::{Deserialize, Serialize};

/// Selects the counter a stats call acts on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Hosts,
    Swarms,
    AnnouncesHandled,
    StopsHandled,
    ScrapesHandled,
    RequestsRejected,
    NotFound,
}
