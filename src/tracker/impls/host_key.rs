use std::fmt;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use crate::tracker::structs::host_key::HostKey;

impl HostKey {
    pub fn new(ip: Ipv4Addr, port: u16) -> HostKey
    {
        let key = ip.octets().iter().enumerate().fold(u64::from(port), |key, (index, octet)| {
            key + (u64::from(*octet) << (16 + 8 * index))
        });
        HostKey(key)
    }
}

impl From<(Ipv4Addr, u16)> for HostKey {
    fn from((ip, port): (Ipv4Addr, u16)) -> Self {
        HostKey::new(ip, port)
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
