//! Statistics operations on the tracker.

pub mod torrent_tracker;
