/// Stateless ranking of a swarm's peers for one requester.
///
/// Peers are ordered by [`PeerSortKey`](crate::tracker::structs::peer_sort_key::PeerSortKey):
/// finished peers first, then by how much is left, network distance to
/// the requester, host key, and finally upload/download deciles.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeerSelector;
