// World store
// All worlds' settings in one file: ~/.config/worldkeeper/worlds.json

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::value::ExternalValue;
use crate::world_data::WorldData;

/// On-disk shape: world name → persisted settings mapping.
type WorldsFile = BTreeMap<String, BTreeMap<String, ExternalValue>>;

/// File-backed collection of [`WorldData`], keyed by world name.
#[derive(Debug)]
pub struct WorldStore {
    path: PathBuf,
    worlds: BTreeMap<String, WorldData>,
}

impl WorldStore {
    /// Default location of the worlds file
    pub fn default_path() -> PathBuf {
        crate::config_dir().join("worlds.json")
    }

    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// Every world must rehydrate cleanly; the first bad world aborts the
    /// load so corrupted state is never silently rewritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let mut worlds = BTreeMap::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: WorldsFile =
                serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

            for (name, map) in file {
                let data = WorldData::deserialize(&map)
                    .map_err(|e| ConfigError::World { name: name.clone(), source: Box::new(e) })?;
                worlds.insert(name, data);
            }
            log::debug!("loaded {} world(s) from {}", worlds.len(), path.display());
        }

        Ok(Self { path, worlds })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every world to disk, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file: WorldsFile = self
            .worlds
            .iter()
            .map(|(name, data)| (name.clone(), data.serialize()))
            .collect();
        let json = serde_json::to_string_pretty(&file).map_err(|e| ConfigError::Parse(e.to_string()))?;

        fs::write(&self.path, json)?;
        log::debug!("saved {} world(s) to {}", self.worlds.len(), self.path.display());
        Ok(())
    }

    /// Add or replace a world, returning the previous settings.
    pub fn insert(&mut self, name: impl Into<String>, data: WorldData) -> Option<WorldData> {
        self.worlds.insert(name.into(), data)
    }

    pub fn get(&self, name: &str) -> Option<&WorldData> {
        self.worlds.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut WorldData> {
        self.worlds.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<WorldData> {
        self.worlds.remove(name)
    }

    /// World names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.worlds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::ConfigValues;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = WorldStore::open(dir.path().join("worlds.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WorldStore::open(dir.path().join("worlds.json")).unwrap();
        let config = ConfigValues::default();

        assert!(store.insert("alpha", WorldData::new("alpha", &config, false)).is_none());
        assert!(store.insert("alpha", WorldData::new("alpha", &config, true)).is_some());
        store.insert("beta", WorldData::new("beta", &config, false));

        assert_eq!(store.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);
        assert!(store.get("alpha").unwrap().private_world());
        assert!(store.remove("alpha").is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_bad_world_names_the_world() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worlds.json");
        fs::write(&path, r#"{ "broken": { "permission": "-" } }"#).unwrap();

        match WorldStore::open(&path) {
            Err(ConfigError::World { name, source }) => {
                assert_eq!(name, "broken");
                assert!(matches!(*source, ConfigError::MissingKey(_)));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worlds.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(WorldStore::open(&path), Err(ConfigError::Parse(_))));
    }
}
