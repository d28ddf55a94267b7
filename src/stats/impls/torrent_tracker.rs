use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            hosts: self.stats.hosts.load(Ordering::SeqCst),
            swarms: self.stats.swarms.load(Ordering::SeqCst),
            announces_handled: self.stats.announces_handled.load(Ordering::SeqCst),
            stops_handled: self.stats.stops_handled.load(Ordering::SeqCst),
            scrapes_handled: self.stats.scrapes_handled.load(Ordering::SeqCst),
            requests_rejected: self.stats.requests_rejected.load(Ordering::SeqCst),
            not_found: self.stats.not_found.load(Ordering::SeqCst),
        }
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Hosts => &self.stats.hosts,
            StatsEvent::Swarms => &self.stats.swarms,
            StatsEvent::AnnouncesHandled => &self.stats.announces_handled,
            StatsEvent::StopsHandled => &self.stats.stops_handled,
            StatsEvent::ScrapesHandled => &self.stats.scrapes_handled,
            StatsEvent::RequestsRejected => &self.stats.requests_rejected,
            StatsEvent::NotFound => &self.stats.not_found,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).fetch_add(value, Ordering::SeqCst);
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }
}
