use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player allowed to build in a world, identified by their uuid.
///
/// The name is only a display hint and may go stale when the player renames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Builder {
    uuid: Uuid,
    name: String,
}

impl Builder {
    /// Separator between uuid and name in the string form.
    pub const SEPARATOR: char = ',';

    pub fn new(uuid: Uuid, name: impl Into<String>) -> Self {
        Self { uuid, name: name.into() }
    }

    /// Parse the `<uuid>,<name>` string form.
    ///
    /// Trailing empty parts are dropped first, so `<uuid>,name,` is accepted
    /// and `<uuid>,` is not. Returns `None` when the input is missing, does
    /// not have exactly two parts, or the uuid is malformed.
    pub fn parse(serialized: Option<&str>) -> Option<Self> {
        let serialized = serialized?;
        let mut parts: Vec<&str> = serialized.split(Self::SEPARATOR).collect();
        while parts.last() == Some(&"") {
            parts.pop();
        }
        if parts.len() != 2 {
            return None;
        }
        let uuid = Uuid::parse_str(parts[0]).ok()?;
        Some(Self::new(uuid, parts[1]))
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl std::fmt::Display for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.uuid, Self::SEPARATOR, self.name)
    }
}
