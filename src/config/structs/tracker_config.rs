use serde::{Deserialize, Serialize};
use crate::tracker::structs::locality_rule::LocalityRule;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Seconds clients should wait between announces.
    pub request_interval: u64,
    /// Peers returned when an announce carries no `numwant`.
    pub numwant_default: u64,
    /// Locality rules, first match wins.
    pub locality: Vec<LocalityRule>,
}
