use crate::tracker::structs::locality_rule::LocalityRule;

/// Ordered prefix rules mapping an address to a proximity weight.
#[derive(Debug, Clone, Default)]
pub struct LocalityTable {
    pub rules: Vec<LocalityRule>,
    /// Weight for addresses no rule matches: twice the largest configured weight.
    pub furthest: u32,
}
