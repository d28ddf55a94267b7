use serde::{Deserialize, Serialize};

/// One `(weight, prefix)` rule of the locality table.
///
/// `prefix` is matched against the dotted-quad text of an address, so
/// `"10.1."` covers `10.1.0.0/16` and `"10.1"` also covers `10.10.x.x`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LocalityRule {
    pub weight: u32,
    pub prefix: String,
}
