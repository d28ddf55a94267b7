use crate::tracker::structs::host_key::HostKey;

/// Lexicographic ranking key; field order is the comparison order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct PeerSortKey {
    /// `0` for finished peers, `1` otherwise.
    pub finished_flag: u8,
    pub left_decile: u64,
    pub location_distance: u32,
    pub host_key: HostKey,
    pub upload_decile: u64,
    pub download_decile: u64,
}
