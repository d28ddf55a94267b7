#![allow(dead_code)]
use std::sync::Arc;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use tempfile::TempDir;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    Arc::new(Configuration::init())
}

pub fn create_test_http_config(real_ip: &str) -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        real_ip: real_ip.to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
    })
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config()))
}

pub fn create_test_service_data(tracker: TestTracker, real_ip: &str) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: create_test_http_config(real_ip),
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Deterministic 20-byte hash filled with `seed`.
pub fn info_hash(seed: u8) -> InfoHash {
    InfoHash([seed; 20])
}

/// Deterministic 20-byte peer id ending in `seed`.
pub fn peer_id(seed: u8) -> [u8; 20] {
    let mut id = *b"-ST0300-000000000000";
    id[19] = seed;
    id
}

pub fn url_encode(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}

pub fn announce_uri(info_hash: &InfoHash, peer_seed: u8, port: u16, left: u64, event: &str) -> String {
    let mut uri = format!(
        "/announce?info_hash={}&peer_id={}&port={}&uploaded=0&downloaded=0&left={}",
        url_encode(&info_hash.0),
        url_encode(&peer_id(peer_seed)),
        port,
        left
    );
    if !event.is_empty() {
        uri.push_str(&format!("&event={event}"));
    }
    uri
}
