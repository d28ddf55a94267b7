//! Scrape request query parameters.

use crate::tracker::structs::info_hash::InfoHash;

/// Parsed scrape request.
///
/// Holds every well-formed `info_hash` value of the query, in request
/// order. Zero hashes is a valid scrape and yields an empty reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeQueryRequest {
    pub info_hash: Vec<InfoHash>,
}
