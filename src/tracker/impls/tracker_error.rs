use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    pub fn code(&self) -> u16
    {
        match self {
            TrackerError::MissingInfoHash => 101,
            TrackerError::MissingPeerId => 102,
            TrackerError::MissingPort => 103,
            TrackerError::InvalidInfoHash => 150,
            TrackerError::InvalidPeerId => 151,
        }
    }

    pub fn message(&self) -> String
    {
        self.to_string()
    }
}
