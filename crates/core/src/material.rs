use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseNameError;

/// Namespace prefix accepted (and dropped) when parsing material ids.
const NAMESPACE: &str = "minecraft:";

/// Reference to an item/block material by its canonical name.
///
/// Canonical names are upper-case ASCII letters, digits and underscores,
/// starting with a letter (`GRASS_BLOCK`, `OAK_LOG`). Materials are stored
/// by name so world files survive changes to the host's internal ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Material(String);

impl Material {
    /// Parse a material id, accepting lower-case and namespaced forms
    /// (`minecraft:grass_block` → `GRASS_BLOCK`).
    pub fn from_name(name: &str) -> Result<Self, ParseNameError> {
        let trimmed = name.trim();
        let bare = trimmed.strip_prefix(NAMESPACE).unwrap_or(trimmed);
        let canonical = bare.to_ascii_uppercase();

        let mut chars = canonical.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_uppercase()
                    && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            }
            None => false,
        };

        if valid {
            Ok(Self(canonical))
        } else {
            Err(ParseNameError::new("material", name))
        }
    }

    /// Canonical name, as written to world and setup files.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Namespaced id (`minecraft:grass_block`).
    pub fn key(&self) -> String {
        format!("{}{}", NAMESPACE, self.0.to_ascii_lowercase())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Material {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Material {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        material.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name_kept() {
        let m = Material::from_name("GRASS_BLOCK").unwrap();
        assert_eq!(m.name(), "GRASS_BLOCK");
    }

    #[test]
    fn test_namespaced_lowercase_normalized() {
        let m = Material::from_name("minecraft:oak_log").unwrap();
        assert_eq!(m.name(), "OAK_LOG");
        assert_eq!(m.key(), "minecraft:oak_log");
    }

    #[test]
    fn test_invalid_names() {
        assert!(Material::from_name("").is_err());
        assert!(Material::from_name("   ").is_err());
        assert!(Material::from_name("9LIVES").is_err());
        assert!(Material::from_name("GRASS BLOCK").is_err());
        assert!(Material::from_name("stone:slab").is_err());
    }

    #[test]
    fn test_string_conversions() {
        let m = Material::try_from("white_wool".to_string()).unwrap();
        assert_eq!(String::from(m), "WHITE_WOOL");
        assert!(Material::try_from("white wool".to_string()).is_err());
    }
}
