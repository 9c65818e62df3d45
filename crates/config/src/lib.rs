//! `worldkeeper-config` — Per-world settings and the files around them.
//!
//! The heart of the crate is [`WorldData`], a registry of typed slots that
//! serializes to a flat, human-readable mapping. [`ConfigValues`] supplies
//! the defaults for new worlds; [`WorldStore`] and [`SetupConfig`] persist
//! state to disk.

pub mod defaults;
pub mod error;
pub mod registry;
pub mod setup;
pub mod store;
pub mod value;
pub mod world_data;

use std::path::PathBuf;

pub use defaults::ConfigValues;
pub use error::ConfigError;
pub use registry::{Registry, Slot};
pub use setup::SetupConfig;
pub use store::WorldStore;
pub use value::{ExternalValue, Value, ValueType};
pub use world_data::{WorldData, WorldDataParts, UNSET_TIMESTAMP};

/// Directory holding all worldkeeper files (`~/.config/worldkeeper`).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("worldkeeper")
}
