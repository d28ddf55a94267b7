#[cfg(test)]
mod tracker_tests {
    use std::collections::HashMap;
    use std::net::Ipv4Addr;
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::locality_rule::LocalityRule;
    use crate::tracker::structs::locality_table::LocalityTable;
    use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;
    use crate::tracker::types::QueryMap;

    const HASH_A: [u8; 20] = [0xaa; 20];
    const HASH_B: [u8; 20] = [0xbb; 20];

    fn tracker() -> TorrentTracker {
        TorrentTracker::new(Arc::new(Configuration::init()))
    }

    fn default_locality() -> LocalityTable {
        LocalityTable::new(Configuration::init().tracker_config.locality)
    }

    fn announce_query(info_hash: [u8; 20], port: u16, left: u64, event: &str) -> QueryMap {
        let mut query: QueryMap = HashMap::new();
        query.insert(String::from("info_hash"), vec![info_hash.to_vec()]);
        query.insert(String::from("peer_id"), vec![b"-XX0001-000000000000".to_vec()]);
        query.insert(String::from("port"), vec![port.to_string().into_bytes()]);
        query.insert(String::from("left"), vec![left.to_string().into_bytes()]);
        if !event.is_empty() {
            query.insert(String::from("event"), vec![event.as_bytes().to_vec()]);
        }
        query
    }

    mod host_key_tests {
        use std::collections::HashSet;
        use std::net::Ipv4Addr;
        use crate::tracker::structs::host_key::HostKey;

        #[test]
        fn test_host_key_layout() {
            let key = HostKey::new(Ipv4Addr::new(1, 2, 3, 4), 80);
            let expected = 80u64 + (1u64 << 16) + (2u64 << 24) + (3u64 << 32) + (4u64 << 40);
            assert_eq!(key, HostKey(expected));
        }

        #[test]
        fn test_host_key_distinguishes_port_and_ip() {
            let keys: HashSet<HostKey> = [
                HostKey::new(Ipv4Addr::new(10, 0, 0, 1), 6881),
                HostKey::new(Ipv4Addr::new(10, 0, 0, 1), 6882),
                HostKey::new(Ipv4Addr::new(10, 0, 0, 2), 6881),
                HostKey::new(Ipv4Addr::new(1, 0, 0, 10), 6881),
            ].into_iter().collect();
            assert_eq!(keys.len(), 4);
        }

        #[test]
        fn test_host_key_from_tuple() {
            let ip = Ipv4Addr::new(192, 168, 1, 1);
            assert_eq!(HostKey::from((ip, 1)), HostKey::new(ip, 1));
        }
    }

    mod locality_tests {
        use std::net::Ipv4Addr;
        use crate::tracker::structs::locality_rule::LocalityRule;
        use crate::tracker::structs::locality_table::LocalityTable;
        use super::default_locality;

        #[test]
        fn test_default_rules() {
            let table = default_locality();
            assert_eq!(table.furthest, 10);
            assert_eq!(table.weight_of(Ipv4Addr::new(31, 193, 4, 5)), 0);
            assert_eq!(table.weight_of(Ipv4Addr::new(37, 59, 0, 1)), 1);
            assert_eq!(table.weight_of(Ipv4Addr::new(216, 65, 9, 9)), 2);
            assert_eq!(table.weight_of(Ipv4Addr::new(62, 133, 1, 1)), 3);
            assert_eq!(table.weight_of(Ipv4Addr::new(216, 94, 1, 1)), 5);
            assert_eq!(table.weight_of(Ipv4Addr::new(8, 8, 8, 8)), 10);
        }

        #[test]
        fn test_first_matching_rule_wins() {
            let table = LocalityTable::new(vec![
                LocalityRule { weight: 7, prefix: String::from("10.") },
                LocalityRule { weight: 1, prefix: String::from("10.0.") },
            ]);
            assert_eq!(table.weight_of(Ipv4Addr::new(10, 0, 0, 1)), 7);
        }

        #[test]
        fn test_prefix_is_textual() {
            let table = LocalityTable::new(vec![LocalityRule { weight: 4, prefix: String::from("1") }]);
            assert_eq!(table.weight_of(Ipv4Addr::new(192, 0, 2, 1)), 4);
            assert_eq!(table.weight_of(Ipv4Addr::new(203, 0, 113, 1)), 8);
        }

        #[test]
        fn test_empty_table() {
            let table = LocalityTable::new(Vec::new());
            assert_eq!(table.furthest, 0);
            assert_eq!(table.weight_of(Ipv4Addr::new(10, 0, 0, 1)), 0);
        }
    }

    mod registry_tests {
        use std::net::Ipv4Addr;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_registry::PeerRegistry;
        use crate::tracker::structs::scrape_counts::ScrapeCounts;
        use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
        use super::{default_locality, HASH_A, HASH_B};

        fn stat(left: u64, event: AnnounceEvent) -> SwarmPeerStat {
            SwarmPeerStat::new(0, 0, left, event)
        }

        #[test]
        fn test_upsert_creates_host_and_swarm() {
            let mut registry = PeerRegistry::new(default_locality());
            let host = registry.upsert(Ipv4Addr::new(31, 193, 0, 1), 6881, InfoHash(HASH_A), stat(10, AnnounceEvent::Started));
            assert_eq!(host.location_weight, 0);
            assert!(host.swarms.contains(&InfoHash(HASH_A)));
            assert_eq!(registry.hosts_count(), 1);
            assert_eq!(registry.swarms_count(), 1);
        }

        #[test]
        fn test_upsert_updates_existing_stat() {
            let mut registry = PeerRegistry::new(default_locality());
            let ip = Ipv4Addr::new(10, 0, 0, 1);
            registry.upsert(ip, 6881, InfoHash(HASH_A), stat(100, AnnounceEvent::Started));
            registry.upsert(ip, 6881, InfoHash(HASH_A), stat(0, AnnounceEvent::Completed));
            assert_eq!(registry.hosts_count(), 1);
            let peers = &registry.swarms[&InfoHash(HASH_A)];
            assert_eq!(peers.len(), 1);
            let only = peers.values().next().unwrap();
            assert_eq!(only.left, 0);
            assert_eq!(only.event, AnnounceEvent::Completed);
        }

        #[test]
        fn test_host_joins_many_swarms() {
            let mut registry = PeerRegistry::new(default_locality());
            let ip = Ipv4Addr::new(10, 0, 0, 1);
            registry.upsert(ip, 6881, InfoHash(HASH_A), stat(1, AnnounceEvent::None));
            let host = registry.upsert(ip, 6881, InfoHash(HASH_B), stat(1, AnnounceEvent::None));
            assert_eq!(host.swarms.len(), 2);
            assert_eq!(registry.swarms_count(), 2);
        }

        #[test]
        fn test_remove_leaves_every_swarm() {
            let mut registry = PeerRegistry::new(default_locality());
            let a = Ipv4Addr::new(10, 0, 0, 1);
            let b = Ipv4Addr::new(10, 0, 0, 2);
            registry.upsert(a, 6881, InfoHash(HASH_A), stat(1, AnnounceEvent::None));
            registry.upsert(a, 6881, InfoHash(HASH_B), stat(1, AnnounceEvent::None));
            registry.upsert(b, 6882, InfoHash(HASH_A), stat(1, AnnounceEvent::None));

            let removed = registry.remove(a, 6881);
            assert_eq!(removed.swarms.len(), 2);
            assert!(registry.host(a, 6881).is_none());
            assert_eq!(registry.swarms_count(), 1);
            assert_eq!(registry.swarms[&InfoHash(HASH_A)].len(), 1);
        }

        #[test]
        fn test_remove_unknown_host_is_harmless() {
            let mut registry = PeerRegistry::new(default_locality());
            let host = registry.remove(Ipv4Addr::new(8, 8, 8, 8), 1);
            assert!(host.swarms.is_empty());
            assert_eq!(host.location_weight, 10);
            assert_eq!(registry.hosts_count(), 0);
        }

        #[test]
        fn test_remove_then_upsert_starts_fresh() {
            let mut registry = PeerRegistry::new(default_locality());
            let ip = Ipv4Addr::new(10, 0, 0, 1);
            registry.upsert(ip, 6881, InfoHash(HASH_A), SwarmPeerStat::new(500, 700, 100, AnnounceEvent::Started));
            registry.upsert(ip, 6881, InfoHash(HASH_B), stat(1, AnnounceEvent::Started));
            registry.remove(ip, 6881);

            let host = registry.upsert(ip, 6881, InfoHash(HASH_A), SwarmPeerStat::new(3, 4, 5, AnnounceEvent::None));
            assert_eq!(host.swarms.iter().copied().collect::<Vec<_>>(), vec![InfoHash(HASH_A)]);
            assert!(!registry.swarms.contains_key(&InfoHash(HASH_B)));
            assert_eq!(registry.hosts_count(), 1);

            let peers = &registry.swarms[&InfoHash(HASH_A)];
            assert_eq!(peers.len(), 1);
            let fresh = peers.values().next().unwrap();
            assert_eq!((fresh.uploaded, fresh.downloaded, fresh.left), (3, 4, 5));
            assert_eq!(fresh.event, AnnounceEvent::None);
        }

        #[test]
        fn test_scrape_counts() {
            let mut registry = PeerRegistry::new(default_locality());
            registry.upsert(Ipv4Addr::new(10, 0, 0, 1), 1, InfoHash(HASH_A), stat(0, AnnounceEvent::None));
            registry.upsert(Ipv4Addr::new(10, 0, 0, 2), 1, InfoHash(HASH_A), stat(0, AnnounceEvent::Completed));
            registry.upsert(Ipv4Addr::new(10, 0, 0, 3), 1, InfoHash(HASH_A), stat(5, AnnounceEvent::Started));
            registry.upsert(Ipv4Addr::new(10, 0, 0, 4), 1, InfoHash(HASH_A), stat(5, AnnounceEvent::Completed));

            assert_eq!(registry.scrape_counts(&InfoHash(HASH_A)), ScrapeCounts { complete: 2, downloaded: 2, incomplete: 2 });
            assert_eq!(registry.scrape_counts(&InfoHash(HASH_B)), ScrapeCounts::default());
        }
    }

    mod selector_tests {
        use std::net::Ipv4Addr;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_registry::PeerRegistry;
        use crate::tracker::structs::peer_selector::PeerSelector;
        use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
        use super::{default_locality, HASH_A};

        #[test]
        fn test_decile() {
            assert_eq!(PeerSelector::decile(0, 100), 0);
            assert_eq!(PeerSelector::decile(55, 100), 5);
            assert_eq!(PeerSelector::decile(100, 100), 10);
            assert_eq!(PeerSelector::decile(u64::MAX, u64::MAX), 10);
            assert_eq!(PeerSelector::decile(3, 0), 30);
        }

        #[test]
        fn test_finished_peers_first_then_less_left() {
            let mut registry = PeerRegistry::new(default_locality());
            let info_hash = InfoHash(HASH_A);
            registry.upsert(Ipv4Addr::new(10, 0, 0, 1), 1, info_hash, SwarmPeerStat::new(0, 0, 900, AnnounceEvent::Started));
            registry.upsert(Ipv4Addr::new(10, 0, 0, 2), 1, info_hash, SwarmPeerStat::new(0, 0, 100, AnnounceEvent::Started));
            registry.upsert(Ipv4Addr::new(10, 0, 0, 3), 1, info_hash, SwarmPeerStat::new(0, 0, 0, AnnounceEvent::None));
            registry.upsert(Ipv4Addr::new(10, 0, 0, 4), 1, info_hash, SwarmPeerStat::new(0, 0, 500, AnnounceEvent::Completed));
            let requester = registry.upsert(Ipv4Addr::new(10, 0, 0, 9), 1, info_hash, SwarmPeerStat::new(0, 0, 1000, AnnounceEvent::Started));

            let order: Vec<u8> = registry.peers_for(&requester, &info_hash)
                .iter()
                .map(|(host, _)| host.ip.octets()[3])
                .collect();
            assert_eq!(order, vec![3, 4, 2, 1]);
        }

        #[test]
        fn test_locality_breaks_ties() {
            let mut registry = PeerRegistry::new(default_locality());
            let info_hash = InfoHash(HASH_A);
            let far = Ipv4Addr::new(8, 8, 8, 8);
            let near = Ipv4Addr::new(37, 59, 1, 1);
            registry.upsert(far, 1, info_hash, SwarmPeerStat::new(0, 0, 10, AnnounceEvent::None));
            registry.upsert(near, 1, info_hash, SwarmPeerStat::new(0, 0, 10, AnnounceEvent::None));
            let requester = registry.upsert(Ipv4Addr::new(31, 193, 1, 1), 1, info_hash, SwarmPeerStat::new(0, 0, 10, AnnounceEvent::None));

            let ranked = registry.peers_for(&requester, &info_hash);
            assert_eq!(ranked[0].0.ip, near);
            assert_eq!(ranked[1].0.ip, far);
        }

        #[test]
        fn test_requester_never_listed() {
            let mut registry = PeerRegistry::new(default_locality());
            let info_hash = InfoHash(HASH_A);
            let requester = registry.upsert(Ipv4Addr::new(10, 0, 0, 1), 1, info_hash, SwarmPeerStat::new(0, 0, 0, AnnounceEvent::None));
            assert!(registry.peers_for(&requester, &info_hash).is_empty());
        }

        #[test]
        fn test_unknown_swarm_is_empty() {
            let mut registry = PeerRegistry::new(default_locality());
            let requester = registry.upsert(Ipv4Addr::new(10, 0, 0, 1), 1, InfoHash(HASH_A), SwarmPeerStat::new(0, 0, 0, AnnounceEvent::None));
            assert!(registry.peers_for(&requester, &InfoHash([0u8; 20])).is_empty());
        }
    }

    mod handler_tests {
        use std::net::Ipv4Addr;
        use crate::common::common::parse_query;
        use crate::tracker::enums::tracker_error::TrackerError;
        use crate::tracker::structs::announce_peer::AnnouncePeer;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::scrape_counts::ScrapeCounts;
        use super::{announce_query, tracker, HASH_A, HASH_B};

        #[test]
        fn test_two_peers_see_each_other() {
            let tracker = tracker();
            let a = Ipv4Addr::new(10, 0, 0, 1);
            let b = Ipv4Addr::new(10, 0, 0, 2);

            let first = tracker.announce(a, &announce_query(HASH_A, 6881, 0, "started")).unwrap();
            assert!(first.peers.is_empty());
            assert_eq!(first.interval, 15);

            let second = tracker.announce(b, &announce_query(HASH_A, 6882, 100, "started")).unwrap();
            assert_eq!(second.peers, vec![AnnouncePeer { ip: a, port: 6881 }]);
            assert_eq!(second.complete, 1);
            assert_eq!(second.incomplete, 0);

            let again = tracker.announce(a, &announce_query(HASH_A, 6881, 0, "")).unwrap();
            assert_eq!(again.peers, vec![AnnouncePeer { ip: b, port: 6882 }]);
            assert_eq!(again.complete, 0);
            assert_eq!(again.incomplete, 1);
        }

        #[test]
        fn test_stopped_removes_host_everywhere() {
            let tracker = tracker();
            let a = Ipv4Addr::new(10, 0, 0, 1);
            tracker.announce(a, &announce_query(HASH_A, 6881, 0, "started")).unwrap();
            tracker.announce(a, &announce_query(HASH_B, 6881, 0, "started")).unwrap();
            assert_eq!(tracker.get_stats().swarms, 2);

            let response = tracker.announce(a, &announce_query(HASH_A, 6881, 0, "stopped")).unwrap();
            assert!(response.peers.is_empty());
            assert!(tracker.get_host(a, 6881).is_none());

            let stats = tracker.get_stats();
            assert_eq!(stats.hosts, 0);
            assert_eq!(stats.swarms, 0);
            assert_eq!(stats.stops_handled, 1);
        }

        #[test]
        fn test_numwant_limits_peers() {
            let tracker = tracker();
            for last in 1..=5u8 {
                tracker.announce(Ipv4Addr::new(10, 0, 0, last), &announce_query(HASH_A, 6881, 1, "")).unwrap();
            }
            let mut query = announce_query(HASH_A, 6881, 1, "");
            query.insert(String::from("numwant"), vec![b"2".to_vec()]);
            let response = tracker.announce(Ipv4Addr::new(10, 0, 0, 9), &query).unwrap();
            assert_eq!(response.peers.len(), 2);

            query.insert(String::from("numwant"), vec![b"0".to_vec()]);
            let response = tracker.announce(Ipv4Addr::new(10, 0, 0, 9), &query).unwrap();
            assert!(response.peers.is_empty());
            assert_eq!(tracker.get_stats().hosts, 6);
        }

        #[test]
        fn test_ip_parameter_overrides_caller() {
            let tracker = tracker();
            let mut query = announce_query(HASH_A, 6881, 0, "");
            query.insert(String::from("ip"), vec![b"37.59.1.2".to_vec()]);
            tracker.announce(Ipv4Addr::new(10, 0, 0, 1), &query).unwrap();
            let host = tracker.get_host(Ipv4Addr::new(37, 59, 1, 2), 6881).unwrap();
            assert_eq!(host.location_weight, 1);

            query.insert(String::from("ip"), vec![b"not-an-ip".to_vec()]);
            tracker.announce(Ipv4Addr::new(10, 0, 0, 1), &query).unwrap();
            assert!(tracker.get_host(Ipv4Addr::new(10, 0, 0, 1), 6881).is_some());
        }

        #[test]
        fn test_validation_order_and_codes() {
            let tracker = tracker();
            let remote = Ipv4Addr::new(10, 0, 0, 1);

            let mut query = announce_query(HASH_A, 6881, 0, "");
            query.remove("peer_id");
            query.remove("port");
            assert_eq!(tracker.announce(remote, &query).unwrap_err(), TrackerError::MissingPeerId);

            let mut query = announce_query(HASH_A, 6881, 0, "");
            query.insert(String::from("peer_id"), vec![b"-XX0001-00000000000".to_vec()]);
            let error = tracker.announce(remote, &query).unwrap_err();
            assert_eq!(error, TrackerError::InvalidPeerId);
            assert_eq!(error.code(), 151);

            let mut query = announce_query(HASH_A, 6881, 0, "");
            query.insert(String::from("port"), vec![b"70000".to_vec()]);
            assert_eq!(tracker.announce(remote, &query).unwrap_err().code(), 103);

            let mut query = announce_query(HASH_A, 6881, 0, "");
            query.remove("info_hash");
            assert_eq!(tracker.announce(remote, &query).unwrap_err().code(), 101);

            let mut query = announce_query(HASH_A, 6881, 0, "");
            query.insert(String::from("info_hash"), vec![vec![0u8; 21]]);
            assert_eq!(tracker.announce(remote, &query).unwrap_err().code(), 150);

            let stats = tracker.get_stats();
            assert_eq!(stats.requests_rejected, 5);
            assert_eq!(stats.hosts, 0);
            assert_eq!(stats.announces_handled, 0);
        }

        #[test]
        fn test_blank_required_fields_count_as_missing() {
            let tracker = tracker();
            let remote = Ipv4Addr::new(10, 0, 0, 1);
            let info_hash = "AAAAAAAAAAAAAAAAAAAA";

            let query = parse_query(Some(format!("peer_id=&port=6881&info_hash={}", info_hash))).unwrap();
            let error = tracker.announce(remote, &query).unwrap_err();
            assert_eq!(error, TrackerError::MissingPeerId);
            assert_eq!(error.code(), 102);

            let query = parse_query(Some(String::from("peer_id=-XX0001-000000000000&port=6881&info_hash="))).unwrap();
            let error = tracker.announce(remote, &query).unwrap_err();
            assert_eq!(error, TrackerError::MissingInfoHash);
            assert_eq!(error.code(), 101);

            let query = parse_query(Some(format!("peer_id=-XX0001-000000000000&port=&info_hash={}", info_hash))).unwrap();
            assert_eq!(tracker.announce(remote, &query).unwrap_err().code(), 103);
            assert_eq!(tracker.get_stats().hosts, 0);
        }

        #[test]
        fn test_repeated_scalar_field_keeps_last_value() {
            let tracker = tracker();
            let remote = Ipv4Addr::new(10, 0, 0, 1);
            let query = parse_query(Some(String::from(
                "peer_id=-XX0001-000000000000&port=1111&port=2222&left=9&left=&info_hash=AAAAAAAAAAAAAAAAAAAA"
            ))).unwrap();
            let request = tracker.validate_announce(remote, &query).unwrap();
            assert_eq!(request.port, 2222);
            assert_eq!(request.left, 9);

            tracker.announce(remote, &query).unwrap();
            assert!(tracker.get_host(remote, 2222).is_some());
            assert!(tracker.get_host(remote, 1111).is_none());
        }

        #[test]
        fn test_malformed_optional_fields_use_defaults() {
            let tracker = tracker();
            let mut query = announce_query(HASH_A, 6881, 0, "paused");
            query.insert(String::from("left"), vec![b"lots".to_vec()]);
            query.insert(String::from("numwant"), vec![b"-1".to_vec()]);
            let request = tracker.validate_announce(Ipv4Addr::new(10, 0, 0, 1), &query).unwrap();
            assert_eq!(request.left, 0);
            assert_eq!(request.numwant, 80);
            assert_eq!(request.event, crate::tracker::enums::announce_event::AnnounceEvent::None);
        }

        #[test]
        fn test_scrape_known_and_unknown() {
            let tracker = tracker();
            tracker.announce(Ipv4Addr::new(10, 0, 0, 1), &announce_query(HASH_A, 6881, 0, "completed")).unwrap();
            tracker.announce(Ipv4Addr::new(10, 0, 0, 2), &announce_query(HASH_A, 6882, 50, "started")).unwrap();

            let mut query = super::QueryMap::new();
            query.insert(String::from("info_hash"), vec![HASH_A.to_vec(), HASH_B.to_vec(), vec![1u8; 5]]);
            let scrape = tracker.scrape(&query);
            assert_eq!(scrape.len(), 2);
            assert_eq!(scrape[&InfoHash(HASH_A)], ScrapeCounts { complete: 1, downloaded: 1, incomplete: 1 });
            assert_eq!(scrape[&InfoHash(HASH_B)], ScrapeCounts::default());
            assert_eq!(tracker.get_stats().scrapes_handled, 1);
        }

        #[test]
        fn test_scrape_without_hashes() {
            let tracker = tracker();
            assert!(tracker.scrape(&super::QueryMap::new()).is_empty());
        }

        #[test]
        fn test_snapshot_lists_hosts_and_swarms() {
            let tracker = tracker();
            tracker.announce(Ipv4Addr::new(10, 0, 0, 2), &announce_query(HASH_A, 6882, 5, "started")).unwrap();
            tracker.announce(Ipv4Addr::new(10, 0, 0, 1), &announce_query(HASH_A, 6881, 0, "")).unwrap();

            let snapshot = tracker.snapshot();
            assert_eq!(snapshot.hosts.len(), 2);
            assert_eq!(snapshot.hosts[0].ip, "10.0.0.1");
            assert_eq!(snapshot.swarms.len(), 1);
            assert_eq!(snapshot.swarms[0].peers.len(), 2);
            assert_eq!(snapshot.swarms[0].info_hash.to_string(), "aa".repeat(20));
        }
    }

    mod property_tests {
        use std::net::Ipv4Addr;
        use proptest::prelude::*;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::host_key::HostKey;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_registry::PeerRegistry;
        use crate::tracker::structs::peer_selector::PeerSelector;
        use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
        use super::{default_locality, HASH_A};

        proptest! {
            #[test]
            fn decile_stays_in_range(value in any::<u64>(), max in 1u64..=u64::MAX) {
                let value = value.min(max);
                let decile = PeerSelector::decile(value, max);
                prop_assert!(decile <= 10);
            }

            #[test]
            fn host_key_is_injective(a in any::<(u32, u16)>(), b in any::<(u32, u16)>()) {
                prop_assume!(a != b);
                prop_assert_ne!(
                    HostKey::new(Ipv4Addr::from(a.0), a.1),
                    HostKey::new(Ipv4Addr::from(b.0), b.1)
                );
            }

            #[test]
            fn ranking_is_deterministic_and_finished_first(lefts in prop::collection::vec(0u64..1000, 1..20)) {
                let mut registry = PeerRegistry::new(default_locality());
                let info_hash = InfoHash(HASH_A);
                for (index, left) in lefts.iter().enumerate() {
                    registry.upsert(Ipv4Addr::new(10, 1, 0, index as u8), 6881, info_hash, SwarmPeerStat::new(0, 0, *left, AnnounceEvent::None));
                }
                let requester = registry.upsert(Ipv4Addr::new(10, 2, 0, 1), 6881, info_hash, SwarmPeerStat::new(0, 0, 1, AnnounceEvent::None));

                let first = registry.peers_for(&requester, &info_hash);
                let second = registry.peers_for(&requester, &info_hash);
                let keys = |ranked: &Vec<(crate::tracker::structs::host::Host, SwarmPeerStat)>| ranked.iter().map(|(host, _)| host.key).collect::<Vec<_>>();
                prop_assert_eq!(keys(&first), keys(&second));
                prop_assert_eq!(first.len(), lefts.len());

                let finished: Vec<bool> = first.iter().map(|(_, stat)| stat.left == 0).collect();
                let boundary = finished.iter().position(|done| !done).unwrap_or(finished.len());
                prop_assert!(finished[boundary..].iter().all(|done| !done));
            }
        }
    }

    #[test]
    fn test_swarm_peer_stat_finished() {
        assert!(SwarmPeerStat::new(0, 0, 0, AnnounceEvent::None).is_finished());
        assert!(SwarmPeerStat::new(0, 0, 5, AnnounceEvent::Completed).is_finished());
        assert!(!SwarmPeerStat::new(0, 0, 5, AnnounceEvent::Started).is_finished());
    }

    #[test]
    fn test_announce_event_parsing() {
        assert_eq!(AnnounceEvent::from("STARTED"), AnnounceEvent::Started);
        assert_eq!(AnnounceEvent::from("stopped"), AnnounceEvent::Stopped);
        assert_eq!(AnnounceEvent::from("completed"), AnnounceEvent::Completed);
        assert_eq!(AnnounceEvent::from("whatever"), AnnounceEvent::None);
        assert_eq!(AnnounceEvent::None.to_string(), "");
    }

    #[test]
    fn test_info_hash_hex() {
        let info_hash = InfoHash(HASH_A);
        let parsed: InfoHash = info_hash.to_string().parse().unwrap();
        assert_eq!(parsed, info_hash);
        assert!("zz".parse::<InfoHash>().is_err());
        assert!(InfoHash::try_from(&[0u8; 19][..]).is_err());
    }

    #[test]
    fn test_locality_rule_deserializes() {
        let rule: LocalityRule = toml::from_str("weight = 3\nprefix = \"62.133.\"").unwrap();
        assert_eq!(rule, LocalityRule { weight: 3, prefix: String::from("62.133.") });
    }

    #[test]
    fn test_tracker_wiring() {
        let tracker = tracker();
        let ip = Ipv4Addr::new(10, 0, 0, 1);
        let host = tracker.add_host_peer(ip, 1, InfoHash(HASH_A), SwarmPeerStat::new(1, 2, 3, AnnounceEvent::Started));
        assert_eq!(tracker.get_host(ip, 1).unwrap(), host);
        assert_eq!(tracker.get_scrape_counts(&InfoHash(HASH_A)).incomplete, 1);
        assert!(tracker.get_peers(&host, &InfoHash(HASH_A)).is_empty());
        tracker.remove_host(ip, 1);
        assert_eq!(tracker.get_stats().hosts, 0);
    }
}
