use serde::Serialize;

/// Registry key for one IPv4 endpoint.
///
/// The port occupies the low 16 bits and each address octet is shifted in
/// above it (`octet_i << (16 + 8 * i)`, in address order), so every
/// (IPv4, port) pair maps to a distinct key below 2^48. Only IPv4 can be
/// encoded; there is no collision handling for anything wider.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize)]
pub struct HostKey(pub u64);
