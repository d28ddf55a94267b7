use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    pub fn as_str(&self) -> &'static str
    {
        match self {
            AnnounceEvent::None => "",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
            AnnounceEvent::Completed => "completed",
        }
    }
}

impl From<&str> for AnnounceEvent {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "started" => AnnounceEvent::Started,
            "stopped" => AnnounceEvent::Stopped,
            "completed" => AnnounceEvent::Completed,
            _ => AnnounceEvent::None,
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
