use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub hosts: AtomicI64,
    pub swarms: AtomicI64,
    pub announces_handled: AtomicI64,
    pub stops_handled: AtomicI64,
    pub scrapes_handled: AtomicI64,
    pub requests_rejected: AtomicI64,
    pub not_found: AtomicI64,
}
