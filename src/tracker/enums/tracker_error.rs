use thiserror::Error;

/// Announce validation failure.
///
/// Each variant maps to a protocol failure code through
/// [`TrackerError::code`]; the `Display` text is the failure reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerError {
    #[error("missing info_hash")]
    MissingInfoHash,

    #[error("missing peer_id")]
    MissingPeerId,

    #[error("missing port")]
    MissingPort,

    #[error("info_hash is not 20bytes long")]
    InvalidInfoHash,

    #[error("peer_id is not 20bytes long")]
    InvalidPeerId,
}
