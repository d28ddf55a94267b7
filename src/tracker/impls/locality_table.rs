use std::net::Ipv4Addr;
use crate::tracker::structs::locality_rule::LocalityRule;
use crate::tracker::structs::locality_table::LocalityTable;

impl LocalityTable {
    pub fn new(rules: Vec<LocalityRule>) -> LocalityTable
    {
        let furthest = rules.iter().map(|rule| rule.weight).max().unwrap_or(0).saturating_mul(2);
        LocalityTable { rules, furthest }
    }

    /// Weight of the first rule whose prefix matches, in configured order.
    pub fn weight_of(&self, ip: Ipv4Addr) -> u32
    {
        let address = ip.to_string();
        self.rules.iter()
            .find(|rule| address.starts_with(rule.prefix.as_str()))
            .map(|rule| rule.weight)
            .unwrap_or(self.furthest)
    }
}
