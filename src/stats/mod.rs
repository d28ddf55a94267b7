//! Tracker statistics.
//!
//! Counters are plain atomics so request handlers can bump them without
//! touching the registry lock. The `hosts` and `swarms` gauges are
//! refreshed from the registry after every mutation.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
