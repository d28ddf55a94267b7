use std::net::Ipv4Addr;
use std::str::FromStr;
use log::debug;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_peer::AnnouncePeer;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::swarm_peer_stat::SwarmPeerStat;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::{QueryMap, ScrapeResponse};

/// Last non-blank value of a scalar field; blank values count as absent.
fn query_value<'a>(query: &'a QueryMap, field: &str) -> Option<&'a [u8]>
{
    query.get(field)
        .and_then(|values| values.iter().rev().find(|value| !value.is_empty()))
        .map(|value| value.as_slice())
}

fn query_parse<T: FromStr>(query: &QueryMap, field: &str) -> Option<T>
{
    query_value(query, field)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|value| value.trim().parse::<T>().ok())
}

impl TorrentTracker {
    /// Checks the required announce fields and applies defaults to the rest.
    ///
    /// Fields are checked in a fixed order (peer_id, port, info_hash) and the
    /// first failure is returned.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(&self, remote_addr: Ipv4Addr, query: &QueryMap) -> Result<AnnounceQueryRequest, TrackerError>
    {
        let peer_id = query_value(query, "peer_id").ok_or(TrackerError::MissingPeerId)?;
        let peer_id = PeerId::try_from(peer_id).map_err(|_| TrackerError::InvalidPeerId)?;

        let port = query_parse::<u16>(query, "port").ok_or(TrackerError::MissingPort)?;

        let ip = match query_value(query, "ip") {
            None => remote_addr,
            Some(raw) => match std::str::from_utf8(raw).ok().and_then(|value| Ipv4Addr::from_str(value.trim()).ok()) {
                Some(ip) => ip,
                None => {
                    debug!("[ANNOUNCE] Ignoring unusable ip parameter, using {}", remote_addr);
                    remote_addr
                }
            }
        };

        let info_hash = query_value(query, "info_hash").ok_or(TrackerError::MissingInfoHash)?;
        let info_hash = InfoHash::try_from(info_hash).map_err(|_| TrackerError::InvalidInfoHash)?;

        let event = query_value(query, "event")
            .map(|bytes| AnnounceEvent::from(String::from_utf8_lossy(bytes).as_ref()))
            .unwrap_or_default();

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            ip,
            uploaded: query_parse(query, "uploaded").unwrap_or(0),
            downloaded: query_parse(query, "downloaded").unwrap_or(0),
            left: query_parse(query, "left").unwrap_or(0),
            event,
            numwant: query_parse(query, "numwant").unwrap_or(self.config.tracker_config.numwant_default),
        })
    }

    /// Applies the announce to the registry, then selects peers for the announcer.
    ///
    /// Both steps run under one write guard, so the selection sees exactly
    /// the state this announce produced.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, announce: &AnnounceQueryRequest) -> AnnounceResponse
    {
        let mut registry = self.registry.write();

        let host = match announce.event {
            AnnounceEvent::Stopped => {
                debug!("[ANNOUNCE] Removing {}:{} from all swarms", announce.ip, announce.port);
                self.update_stats(StatsEvent::StopsHandled, 1);
                registry.remove(announce.ip, announce.port)
            }
            _ => {
                debug!("[ANNOUNCE] Adding {}:{} to infohash {}", announce.ip, announce.port, announce.info_hash);
                registry.upsert(
                    announce.ip,
                    announce.port,
                    announce.info_hash,
                    SwarmPeerStat::new(announce.uploaded, announce.downloaded, announce.left, announce.event)
                )
            }
        };
        self.refresh_registry_stats(&registry);

        let mut complete = 0u64;
        let peers: Vec<AnnouncePeer> = registry.peers_for(&host, &announce.info_hash)
            .into_iter()
            .take(usize::try_from(announce.numwant).unwrap_or(usize::MAX))
            .map(|(peer, stat)| {
                if stat.is_finished() {
                    complete += 1;
                }
                AnnouncePeer { ip: peer.ip, port: peer.port }
            })
            .collect();
        drop(registry);

        AnnounceResponse {
            interval: self.config.tracker_config.request_interval,
            complete,
            incomplete: peers.len() as u64 - complete,
            peers,
        }
    }

    /// Validates and handles one announce.
    pub fn announce(&self, remote_addr: Ipv4Addr, query: &QueryMap) -> Result<AnnounceResponse, TrackerError>
    {
        let announce = match self.validate_announce(remote_addr, query) {
            Ok(announce) => announce,
            Err(error) => {
                debug!("[ANNOUNCE] Rejected request from {}: {} ({})", remote_addr, error, error.code());
                self.update_stats(StatsEvent::RequestsRejected, 1);
                return Err(error);
            }
        };
        self.update_stats(StatsEvent::AnnouncesHandled, 1);
        Ok(self.handle_announce(&announce))
    }

    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_scrape(&self, query: &QueryMap) -> ScrapeQueryRequest
    {
        let info_hash = query.get("info_hash")
            .map(|values| values.iter()
                .filter_map(|value| match InfoHash::try_from(value.as_slice()) {
                    Ok(info_hash) => Some(info_hash),
                    Err(_) => {
                        debug!("[SCRAPE] Skipping info_hash of {} bytes", value.len());
                        None
                    }
                })
                .collect())
            .unwrap_or_default();

        ScrapeQueryRequest { info_hash }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_scrape(&self, scrape: &ScrapeQueryRequest) -> ScrapeResponse
    {
        let registry = self.registry.read();
        scrape.info_hash.iter()
            .map(|info_hash| (*info_hash, registry.scrape_counts(info_hash)))
            .collect()
    }

    /// Validates and handles one scrape; scrape has no failure cases.
    pub fn scrape(&self, query: &QueryMap) -> ScrapeResponse
    {
        self.update_stats(StatsEvent::ScrapesHandled, 1);
        let scrape = self.validate_scrape(query);
        self.handle_scrape(&scrape)
    }
}
