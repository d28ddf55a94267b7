//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// Trackers receive it as raw bytes in the percent-decoded query string;
/// it is displayed and serialized as 40 lowercase hex characters.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
