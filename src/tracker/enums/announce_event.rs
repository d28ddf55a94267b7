use serde::{Deserialize, Serialize};

/// The `event` an announce carries, lower-cased.
///
/// Values other than the three named events are kept as `None`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnounceEvent {
    #[default]
    None,
    Started,
    Stopped,
    Completed,
}
