use serde::Serialize;

/// Plain copy of [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub hosts: i64,
    pub swarms: i64,
    pub announces_handled: i64,
    pub stops_handled: i64,
    pub scrapes_handled: i64,
    pub requests_rejected: i64,
    pub not_found: i64,
}
