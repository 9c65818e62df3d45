// Navigator item setup
// Materials shown for world types and statuses: ~/.config/worldkeeper/setup.toml

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use worldkeeper_core::{Material, WorldStatus, WorldType};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SetupFile {
    #[serde(default)]
    setup: SetupItems,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SetupItems {
    /// `setup.type.<type>.create|default`
    #[serde(default, rename = "type")]
    types: BTreeMap<String, TypeItems>,
    /// `setup.status.<status>`
    #[serde(default)]
    status: BTreeMap<String, Material>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct TypeItems {
    /// Item shown in the create-world menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    create: Option<Material>,
    /// Item given to new worlds of this type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<Material>,
}

/// Persisted choice of display materials. Every `save_*` call writes
/// through to disk.
#[derive(Debug)]
pub struct SetupConfig {
    path: PathBuf,
    file: SetupFile,
}

impl SetupConfig {
    pub fn default_path() -> PathBuf {
        crate::config_dir().join("setup.toml")
    }

    /// Open the setup file at `path`. A missing file has no items.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let file = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            SetupFile::default()
        };
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn create_item(&self, world_type: WorldType) -> Option<&Material> {
        self.file.setup.types.get(&world_type.key())?.create.as_ref()
    }

    pub fn default_item(&self, world_type: WorldType) -> Option<&Material> {
        self.file.setup.types.get(&world_type.key())?.default.as_ref()
    }

    pub fn status_item(&self, status: WorldStatus) -> Option<&Material> {
        self.file.setup.status.get(&status_key(status))
    }

    pub fn save_create_item(&mut self, world_type: WorldType, material: Material) -> Result<(), ConfigError> {
        self.file.setup.types.entry(world_type.key()).or_default().create = Some(material);
        self.save_file()
    }

    pub fn save_default_item(&mut self, world_type: WorldType, material: Material) -> Result<(), ConfigError> {
        self.file.setup.types.entry(world_type.key()).or_default().default = Some(material);
        self.save_file()
    }

    pub fn save_status_item(&mut self, status: WorldStatus, material: Material) -> Result<(), ConfigError> {
        self.file.setup.status.insert(status_key(status), material);
        self.save_file()
    }

    fn save_file(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(&self.file).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

fn status_key(status: WorldStatus) -> String {
    status.name().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(name: &str) -> Material {
        Material::from_name(name).unwrap()
    }

    #[test]
    fn test_items_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.toml");

        let mut setup = SetupConfig::open(&path).unwrap();
        setup.save_create_item(WorldType::Flat, material("GRASS_BLOCK")).unwrap();
        setup.save_default_item(WorldType::Flat, material("MOSS_BLOCK")).unwrap();
        setup.save_status_item(WorldStatus::Archive, material("BOOKSHELF")).unwrap();

        let reopened = SetupConfig::open(&path).unwrap();
        assert_eq!(reopened.create_item(WorldType::Flat), Some(&material("GRASS_BLOCK")));
        assert_eq!(reopened.default_item(WorldType::Flat), Some(&material("MOSS_BLOCK")));
        assert_eq!(reopened.status_item(WorldStatus::Archive), Some(&material("BOOKSHELF")));
        assert_eq!(reopened.create_item(WorldType::Nether), None);
        assert_eq!(reopened.status_item(WorldStatus::Hidden), None);
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.toml");

        let mut setup = SetupConfig::open(&path).unwrap();
        setup.save_create_item(WorldType::Void, material("GLASS")).unwrap();
        setup.save_status_item(WorldStatus::InProgress, material("YELLOW_DYE")).unwrap();

        let value: toml::Value = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["setup"]["type"]["void"]["create"].as_str(), Some("GLASS"));
        assert_eq!(value["setup"]["status"]["in_progress"].as_str(), Some("YELLOW_DYE"));
    }

    #[test]
    fn test_invalid_material_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.toml");
        fs::write(&path, "[setup.status]\nfinished = \"not a material\"\n").unwrap();
        assert!(matches!(SetupConfig::open(&path), Err(ConfigError::Parse(_))));
    }
}
