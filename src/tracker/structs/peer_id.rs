/// The 20-byte id a client sends with every announce.
///
/// The registry is keyed by address, not by peer id; the id is only
/// checked for presence and length.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
