// In-memory and persisted value shapes for registry slots

use serde::{Deserialize, Serialize};
use worldkeeper_core::{Difficulty, Material, WorldStatus};

/// Declared type of a slot. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Str,
    Bool,
    Long,
    Difficulty,
    Material,
    Status,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Str => "string",
            ValueType::Bool => "boolean",
            ValueType::Long => "long",
            ValueType::Difficulty => "difficulty",
            ValueType::Material => "material",
            ValueType::Status => "status",
        }
    }
}

/// A slot's in-memory value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Long(i64),
    Difficulty(Difficulty),
    Material(Material),
    Status(WorldStatus),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Str(_) => ValueType::Str,
            Value::Bool(_) => ValueType::Bool,
            Value::Long(_) => ValueType::Long,
            Value::Difficulty(_) => ValueType::Difficulty,
            Value::Material(_) => ValueType::Material,
            Value::Status(_) => ValueType::Status,
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<Difficulty> for Value {
    fn from(v: Difficulty) -> Self {
        Value::Difficulty(v)
    }
}

impl From<Material> for Value {
    fn from(v: Material) -> Self {
        Value::Material(v)
    }
}

impl From<WorldStatus> for Value {
    fn from(v: WorldStatus) -> Self {
        Value::Status(v)
    }
}

/// A persisted scalar. Serializes untagged, so files hold plain
/// strings, booleans and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ExternalValue {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            ExternalValue::Bool(b) => format!("boolean {b}"),
            ExternalValue::Int(n) => format!("integer {n}"),
            ExternalValue::Str(s) => format!("string '{s}'"),
        }
    }
}
