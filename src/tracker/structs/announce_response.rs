use serde::Serialize;
use crate::tracker::structs::announce_peer::AnnouncePeer;

/// Announce reply, handed to the wire codec as-is.
///
/// `complete` and `incomplete` describe the returned `peers` only, not the
/// whole swarm.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub interval: u64,
    pub complete: u64,
    pub incomplete: u64,
    pub peers: Vec<AnnouncePeer>,
}
