// Defaults for newly created worlds
// Loaded from ~/.config/worldkeeper/config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use worldkeeper_core::Difficulty;

use crate::error::ConfigError;

/// A value that differs between shared (public) and private worlds.
///
/// A table that names only one scope keeps the default for the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>, Scoped<T>: Default"))]
pub struct Scoped<T> {
    pub public: T,
    pub private: T,
}

impl<T> Scoped<T> {
    pub fn get(&self, private_world: bool) -> &T {
        if private_world {
            &self.private
        } else {
            &self.public
        }
    }
}

impl Default for Scoped<String> {
    fn default() -> Self {
        Self {
            public: "-".to_string(),
            private: "worldkeeper.private.%world%".to_string(),
        }
    }
}

impl Default for Scoped<bool> {
    // Private worlds belong to their creator, so restrict them
    fn default() -> Self {
        Self { public: false, private: true }
    }
}

/// `[world]` table: settings applied to every new world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WorldDefaults {
    pub difficulty: Difficulty,

    /// Permission needed to enter; `%world%` is replaced by the world name.
    /// `-` means no permission is required.
    pub permission: Scoped<String>,

    /// Whether only listed builders may modify the world.
    pub builders_enabled: Scoped<bool>,

    pub block_breaking: bool,
    pub block_interactions: bool,
    pub block_placement: bool,
    pub explosions: bool,
    pub mob_ai: bool,
    pub physics: bool,
}

impl Default for WorldDefaults {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            permission: Scoped::default(),
            builders_enabled: Scoped::default(),
            block_breaking: true,
            block_interactions: true,
            block_placement: true,
            explosions: true,
            mob_ai: true,
            physics: true,
        }
    }
}

/// Defaults source for [`crate::WorldData::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigValues {
    pub world: WorldDefaults,
}

impl ConfigValues {
    /// Default location of the config file
    pub fn config_path() -> PathBuf {
        crate::config_dir().join("config.toml")
    }

    /// Permission template for a world of the given scope.
    pub fn default_permission(&self, private_world: bool) -> &str {
        self.world.permission.get(private_world)
    }

    pub fn builders_enabled(&self, private_world: bool) -> bool {
        *self.world.builders_enabled.get(private_world)
    }

    /// Parse a config file's contents. Missing keys take their defaults;
    /// unknown difficulty names and malformed TOML are errors.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file is created with the defaults. A file that cannot be
    /// read or parsed is left untouched and the defaults are used.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                log::warn!("Error writing default {}: {}", path.display(), e);
            }
            return config;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Error parsing {}: {}", path.display(), e);
                    log::warn!("Using default world settings");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
