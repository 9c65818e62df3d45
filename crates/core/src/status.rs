use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseNameError;

/// Lifecycle state of a build world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorldStatus {
    /// Freshly created, nobody has built anything yet
    #[default]
    NotStarted,
    InProgress,
    AlmostFinished,
    Finished,
    /// Kept for reference, no longer worked on
    Archive,
    /// Excluded from navigator listings
    Hidden,
}

impl WorldStatus {
    pub const ALL: [WorldStatus; 6] = [
        WorldStatus::NotStarted,
        WorldStatus::InProgress,
        WorldStatus::AlmostFinished,
        WorldStatus::Finished,
        WorldStatus::Archive,
        WorldStatus::Hidden,
    ];

    /// Canonical name, as written to world and setup files.
    pub fn name(&self) -> &'static str {
        match self {
            WorldStatus::NotStarted => "NOT_STARTED",
            WorldStatus::InProgress => "IN_PROGRESS",
            WorldStatus::AlmostFinished => "ALMOST_FINISHED",
            WorldStatus::Finished => "FINISHED",
            WorldStatus::Archive => "ARCHIVE",
            WorldStatus::Hidden => "HIDDEN",
        }
    }
}

impl std::fmt::Display for WorldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorldStatus {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| ParseNameError::new("world status", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(WorldStatus::default(), WorldStatus::NotStarted);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("ALMOST_FINISHED".parse::<WorldStatus>().unwrap(), WorldStatus::AlmostFinished);
        assert!("ALMOST FINISHED".parse::<WorldStatus>().is_err());
        assert!("3".parse::<WorldStatus>().is_err());
    }
}
