// Per-world settings
// Persisted as one flat mapping per world inside worlds.json

use std::collections::BTreeMap;

use worldkeeper_core::{Difficulty, Material, ParseNameError, WorldStatus};

use crate::defaults::ConfigValues;
use crate::error::ConfigError;
use crate::registry::{Registry, Slot};
use crate::value::{ExternalValue, Value, ValueType};

/// Timestamp value meaning "never recorded".
pub const UNSET_TIMESTAMP: i64 = -1;

/// Placeholder in permission templates replaced by the world name.
pub const WORLD_PLACEHOLDER: &str = "%world%";

/// Project value for worlds that have no project assigned.
pub const NO_PROJECT: &str = "-";

pub const SPAWN: &str = "spawn";
pub const PERMISSION: &str = "permission";
pub const PROJECT: &str = "project";
pub const DIFFICULTY: &str = "difficulty";
pub const MATERIAL: &str = "material";
pub const STATUS: &str = "status";
pub const BLOCK_BREAKING: &str = "block-breaking";
pub const BLOCK_INTERACTIONS: &str = "block-interactions";
pub const BLOCK_PLACEMENT: &str = "block-placement";
pub const BUILDERS_ENABLED: &str = "builders-enabled";
pub const EXPLOSIONS: &str = "explosions";
pub const MOB_AI: &str = "mob-ai";
pub const PHYSICS: &str = "physics";
pub const PRIVATE: &str = "private";
pub const LAST_EDITED: &str = "last-edited";
pub const LAST_LOADED: &str = "last-loaded";
pub const LAST_UNLOADED: &str = "last-unloaded";

const BOOL_KEYS: [&str; 8] = [
    BLOCK_BREAKING,
    BLOCK_INTERACTIONS,
    BLOCK_PLACEMENT,
    BUILDERS_ENABLED,
    EXPLOSIONS,
    MOB_AI,
    PHYSICS,
    PRIVATE,
];

const TIMESTAMP_KEYS: [&str; 3] = [LAST_EDITED, LAST_LOADED, LAST_UNLOADED];

/// Every value of a [`WorldData`], spelled out. Used to restore persisted
/// worlds without running any default logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldDataParts {
    pub custom_spawn: Option<String>,
    pub permission: String,
    pub project: String,
    pub difficulty: Difficulty,
    pub material: Option<Material>,
    pub status: WorldStatus,
    pub block_breaking: bool,
    pub block_interactions: bool,
    pub block_placement: bool,
    pub builders_enabled: bool,
    pub explosions: bool,
    pub mob_ai: bool,
    pub physics: bool,
    pub private_world: bool,
    pub last_edited: i64,
    pub last_loaded: i64,
    pub last_unloaded: i64,
}

/// Settings of a single world, backed by a typed slot [`Registry`].
#[derive(Debug, Clone)]
pub struct WorldData {
    registry: Registry,
}

/// Accessor pair for a boolean setting.
macro_rules! bool_setting {
    ($get:ident, $set:ident, $key:expr) => {
        pub fn $get(&self) -> bool {
            match self.value($key) {
                Value::Bool(b) => *b,
                other => mismatch($key, ValueType::Bool, other),
            }
        }

        pub fn $set(&mut self, value: bool) {
            self.registry.set($key, Some(Value::Bool(value)));
        }
    };
}

/// Accessor pair for a timestamp setting (epoch milliseconds).
macro_rules! timestamp_setting {
    ($get:ident, $set:ident, $mark:ident, $key:expr) => {
        pub fn $get(&self) -> i64 {
            match self.value($key) {
                Value::Long(n) => *n,
                other => mismatch($key, ValueType::Long, other),
            }
        }

        pub fn $set(&mut self, value: i64) {
            self.registry.set($key, Some(Value::Long(value)));
        }

        /// Record the current time.
        pub fn $mark(&mut self) {
            self.$set(now_millis());
        }
    };
}

impl WorldData {
    /// Declares every setting with its slot kind. All slots start empty.
    fn declare() -> Self {
        let mut registry = Registry::new();

        registry.register(SPAWN, ValueType::Str);
        registry.register(PERMISSION, ValueType::Str);
        registry.register(PROJECT, ValueType::Str);

        registry.register_slot(DIFFICULTY, Slot::difficulty());
        registry.register_slot(MATERIAL, Slot::material());
        registry.register_slot(STATUS, Slot::status());

        for key in BOOL_KEYS {
            registry.register(key, ValueType::Bool);
        }
        for key in TIMESTAMP_KEYS {
            registry.register(key, ValueType::Long);
        }

        Self { registry }
    }

    /// Settings for a newly created world named `name`.
    ///
    /// The permission template comes from `config` with `%world%` replaced by
    /// the name; timestamps start at [`UNSET_TIMESTAMP`]. The material is left
    /// unset: it is chosen later when the world's navigator item is picked.
    pub fn new(name: &str, config: &ConfigValues, private_world: bool) -> Self {
        let mut data = Self::declare();
        let world = &config.world;

        data.set_custom_spawn(None);
        data.set_permission(config.default_permission(private_world).replace(WORLD_PLACEHOLDER, name));
        data.set_project(NO_PROJECT);

        data.set_difficulty(world.difficulty);
        data.set_status(WorldStatus::NotStarted);

        data.set_block_breaking(world.block_breaking);
        data.set_block_interactions(world.block_interactions);
        data.set_block_placement(world.block_placement);
        data.set_builders_enabled(config.builders_enabled(private_world));
        data.set_explosions(world.explosions);
        data.set_mob_ai(world.mob_ai);
        data.set_physics(world.physics);
        data.set_private_world(private_world);

        data.set_last_edited(UNSET_TIMESTAMP);
        data.set_last_loaded(UNSET_TIMESTAMP);
        data.set_last_unloaded(UNSET_TIMESTAMP);

        data
    }

    /// Settings with every value given explicitly.
    pub fn from_parts(parts: WorldDataParts) -> Self {
        let mut data = Self::declare();

        data.set_custom_spawn(parts.custom_spawn);
        data.set_permission(parts.permission);
        data.set_project(parts.project);

        data.set_difficulty(parts.difficulty);
        data.set_material(parts.material);
        data.set_status(parts.status);

        data.set_block_breaking(parts.block_breaking);
        data.set_block_interactions(parts.block_interactions);
        data.set_block_placement(parts.block_placement);
        data.set_builders_enabled(parts.builders_enabled);
        data.set_explosions(parts.explosions);
        data.set_mob_ai(parts.mob_ai);
        data.set_physics(parts.physics);
        data.set_private_world(parts.private_world);

        data.set_last_edited(parts.last_edited);
        data.set_last_loaded(parts.last_loaded);
        data.set_last_unloaded(parts.last_unloaded);

        data
    }

    /// Restore settings from a persisted mapping.
    ///
    /// `spawn` and `material` may be missing; every other setting must be
    /// present and well-formed. Nothing is defaulted: a bad value is an error.
    pub fn deserialize(map: &BTreeMap<String, ExternalValue>) -> Result<Self, ConfigError> {
        for key in map.keys() {
            if !Self::is_known_key(key) {
                log::debug!("ignoring unknown world setting '{}'", key);
            }
        }

        let parts = WorldDataParts {
            custom_spawn: optional_str(map, SPAWN)?,
            permission: required_str(map, PERMISSION)?,
            project: required_str(map, PROJECT)?,
            difficulty: parse_name::<Difficulty>(DIFFICULTY, &required_str(map, DIFFICULTY)?)?,
            material: optional_str(map, MATERIAL)?
                .map(|name| parse_name::<Material>(MATERIAL, &name))
                .transpose()?,
            status: parse_name::<WorldStatus>(STATUS, &required_str(map, STATUS)?)?,
            block_breaking: required_bool(map, BLOCK_BREAKING)?,
            block_interactions: required_bool(map, BLOCK_INTERACTIONS)?,
            block_placement: required_bool(map, BLOCK_PLACEMENT)?,
            builders_enabled: required_bool(map, BUILDERS_ENABLED)?,
            explosions: required_bool(map, EXPLOSIONS)?,
            mob_ai: required_bool(map, MOB_AI)?,
            physics: required_bool(map, PHYSICS)?,
            private_world: required_bool(map, PRIVATE)?,
            last_edited: required_timestamp(map, LAST_EDITED)?,
            last_loaded: required_timestamp(map, LAST_LOADED)?,
            last_unloaded: required_timestamp(map, LAST_UNLOADED)?,
        };

        Ok(Self::from_parts(parts))
    }

    /// Persisted mapping. Unset settings (no custom spawn, no material) are
    /// omitted rather than written as empty values.
    pub fn serialize(&self) -> BTreeMap<String, ExternalValue> {
        self.registry.serialize()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether `key` is one of the declared world settings.
    pub fn is_known_key(key: &str) -> bool {
        matches!(key, SPAWN | PERMISSION | PROJECT | DIFFICULTY | MATERIAL | STATUS)
            || BOOL_KEYS.contains(&key)
            || TIMESTAMP_KEYS.contains(&key)
    }

    #[track_caller]
    fn value(&self, key: &'static str) -> &Value {
        match self.registry.get(key) {
            Some(value) => value,
            None => panic!("world setting '{key}' read before it was set"),
        }
    }

    // Strings

    /// Custom spawn location, `None` when the world uses its default spawn.
    pub fn custom_spawn(&self) -> Option<&str> {
        match self.registry.get(SPAWN) {
            Some(Value::Str(s)) => Some(s.as_str()),
            Some(other) => mismatch(SPAWN, ValueType::Str, other),
            None => None,
        }
    }

    pub fn set_custom_spawn(&mut self, spawn: Option<String>) {
        self.registry.set(SPAWN, spawn.map(Value::Str));
    }

    pub fn permission(&self) -> &str {
        match self.value(PERMISSION) {
            Value::Str(s) => s.as_str(),
            other => mismatch(PERMISSION, ValueType::Str, other),
        }
    }

    pub fn set_permission(&mut self, permission: impl Into<String>) {
        self.registry.set(PERMISSION, Some(Value::Str(permission.into())));
    }

    pub fn project(&self) -> &str {
        match self.value(PROJECT) {
            Value::Str(s) => s.as_str(),
            other => mismatch(PROJECT, ValueType::Str, other),
        }
    }

    pub fn set_project(&mut self, project: impl Into<String>) {
        self.registry.set(PROJECT, Some(Value::Str(project.into())));
    }

    // Named values

    pub fn difficulty(&self) -> Difficulty {
        match self.value(DIFFICULTY) {
            Value::Difficulty(d) => *d,
            other => mismatch(DIFFICULTY, ValueType::Difficulty, other),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.registry.set(DIFFICULTY, Some(Value::Difficulty(difficulty)));
    }

    /// Navigator item material. Unset for worlds created with defaults.
    pub fn material(&self) -> Option<&Material> {
        match self.registry.get(MATERIAL) {
            Some(Value::Material(m)) => Some(m),
            Some(other) => mismatch(MATERIAL, ValueType::Material, other),
            None => None,
        }
    }

    pub fn set_material(&mut self, material: Option<Material>) {
        self.registry.set(MATERIAL, material.map(Value::Material));
    }

    pub fn status(&self) -> WorldStatus {
        match self.value(STATUS) {
            Value::Status(s) => *s,
            other => mismatch(STATUS, ValueType::Status, other),
        }
    }

    pub fn set_status(&mut self, status: WorldStatus) {
        self.registry.set(STATUS, Some(Value::Status(status)));
    }

    // Flags

    bool_setting!(block_breaking, set_block_breaking, BLOCK_BREAKING);
    bool_setting!(block_interactions, set_block_interactions, BLOCK_INTERACTIONS);
    bool_setting!(block_placement, set_block_placement, BLOCK_PLACEMENT);
    bool_setting!(builders_enabled, set_builders_enabled, BUILDERS_ENABLED);
    bool_setting!(explosions, set_explosions, EXPLOSIONS);
    bool_setting!(mob_ai, set_mob_ai, MOB_AI);
    bool_setting!(physics, set_physics, PHYSICS);
    bool_setting!(private_world, set_private_world, PRIVATE);

    // Timestamps

    timestamp_setting!(last_edited, set_last_edited, mark_edited, LAST_EDITED);
    timestamp_setting!(last_loaded, set_last_loaded, mark_loaded, LAST_LOADED);
    timestamp_setting!(last_unloaded, set_last_unloaded, mark_unloaded, LAST_UNLOADED);
}

/// Whether a timestamp is the "never recorded" sentinel.
pub fn is_unset(timestamp: i64) -> bool {
    timestamp == UNSET_TIMESTAMP
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[track_caller]
fn mismatch(key: &str, expected: ValueType, found: &Value) -> ! {
    panic!(
        "world setting '{key}' is declared as {} but holds a {}",
        expected.as_str(),
        found.value_type().as_str()
    )
}

fn optional_str(
    map: &BTreeMap<String, ExternalValue>,
    key: &'static str,
) -> Result<Option<String>, ConfigError> {
    match map.get(key) {
        None => Ok(None),
        Some(ExternalValue::Str(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_type(key, "string", other)),
    }
}

fn required_str(map: &BTreeMap<String, ExternalValue>, key: &'static str) -> Result<String, ConfigError> {
    optional_str(map, key)?.ok_or(ConfigError::MissingKey(key))
}

fn required_bool(map: &BTreeMap<String, ExternalValue>, key: &'static str) -> Result<bool, ConfigError> {
    match map.get(key) {
        None => Err(ConfigError::MissingKey(key)),
        Some(ExternalValue::Bool(b)) => Ok(*b),
        Some(other) => Err(wrong_type(key, "boolean", other)),
    }
}

fn required_timestamp(map: &BTreeMap<String, ExternalValue>, key: &'static str) -> Result<i64, ConfigError> {
    match map.get(key) {
        None => Err(ConfigError::MissingKey(key)),
        Some(ExternalValue::Int(n)) if *n < UNSET_TIMESTAMP => {
            Err(ConfigError::InvalidTimestamp { key, value: *n })
        }
        Some(ExternalValue::Int(n)) => Ok(*n),
        Some(other) => Err(wrong_type(key, "integer", other)),
    }
}

fn parse_name<T>(key: &'static str, name: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseNameError>,
{
    name.parse().map_err(|source| ConfigError::UnknownName { key, source })
}

fn wrong_type(key: &'static str, expected: &'static str, found: &ExternalValue) -> ConfigError {
    ConfigError::WrongType { key, expected, found: found.describe() }
}
