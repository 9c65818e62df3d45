use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseNameError;

/// How a world was generated or brought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorldType {
    Normal,
    Flat,
    Nether,
    End,
    Void,
    Imported,
    Custom,
    Private,
}

impl WorldType {
    pub const ALL: [WorldType; 8] = [
        WorldType::Normal,
        WorldType::Flat,
        WorldType::Nether,
        WorldType::End,
        WorldType::Void,
        WorldType::Imported,
        WorldType::Custom,
        WorldType::Private,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WorldType::Normal => "NORMAL",
            WorldType::Flat => "FLAT",
            WorldType::Nether => "NETHER",
            WorldType::End => "END",
            WorldType::Void => "VOID",
            WorldType::Imported => "IMPORTED",
            WorldType::Custom => "CUSTOM",
            WorldType::Private => "PRIVATE",
        }
    }

    /// Lower-case form used as a path segment in setup keys.
    pub fn key(&self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl std::fmt::Display for WorldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorldType {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseNameError::new("world type", s))
    }
}
