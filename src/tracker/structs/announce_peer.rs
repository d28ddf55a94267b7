use std::net::Ipv4Addr;
use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct AnnouncePeer {
    pub ip: Ipv4Addr,
    pub port: u16,
}
