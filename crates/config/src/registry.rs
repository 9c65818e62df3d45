//! Typed slot registry.
//!
//! A [`Registry`] maps setting keys to [`Slot`]s. Each slot holds at most one
//! [`Value`] of a type declared at registration, plus the function that turns
//! that value into its persisted [`ExternalValue`]. Serialization walks the
//! registry and emits only populated slots.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::value::{ExternalValue, Value, ValueType};

/// Converts a present value into its persisted form.
pub type ExternalFormFn = fn(&Value) -> ExternalValue;

/// A single named, typed value container.
#[derive(Debug, Clone)]
pub struct Slot {
    value_type: ValueType,
    value: Option<Value>,
    external_form_fn: ExternalFormFn,
}

impl Slot {
    /// A slot that persists its value unchanged. Only for scalar types
    /// (string, boolean, long).
    pub fn new(value_type: ValueType) -> Self {
        Self::with_external_form(value_type, raw_form)
    }

    /// A slot with a custom persisted representation.
    pub fn with_external_form(value_type: ValueType, external_form_fn: ExternalFormFn) -> Self {
        Self { value_type, value: None, external_form_fn }
    }

    /// Difficulty slot, persisted as the difficulty's canonical name.
    pub fn difficulty() -> Self {
        Self::with_external_form(ValueType::Difficulty, name_form)
    }

    /// Material slot, persisted as the material's canonical name.
    pub fn material() -> Self {
        Self::with_external_form(ValueType::Material, name_form)
    }

    /// Status slot, persisted as the status's canonical name.
    pub fn status() -> Self {
        Self::with_external_form(ValueType::Status, name_form)
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn get(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Store a value.
    ///
    /// # Panics
    /// If the value's type differs from the slot's declared type.
    #[track_caller]
    pub fn set(&mut self, value: Value) {
        if value.value_type() != self.value_type {
            panic!(
                "slot declared as {} cannot hold a {}",
                self.value_type.as_str(),
                value.value_type().as_str()
            );
        }
        self.value = Some(value);
    }

    /// Store a value, or clear the slot when `None`.
    #[track_caller]
    pub fn set_opt(&mut self, value: Option<Value>) {
        match value {
            Some(v) => self.set(v),
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Persisted representation of the current value.
    ///
    /// # Panics
    /// If the slot is empty. Callers check [`Slot::is_set`] first.
    #[track_caller]
    pub fn external_form(&self) -> ExternalValue {
        match &self.value {
            Some(value) => (self.external_form_fn)(value),
            None => panic!("external form requested for an empty {} slot", self.value_type.as_str()),
        }
    }
}

fn raw_form(value: &Value) -> ExternalValue {
    match value {
        Value::Str(s) => ExternalValue::Str(s.clone()),
        Value::Bool(b) => ExternalValue::Bool(*b),
        Value::Long(n) => ExternalValue::Int(*n),
        other => panic!(
            "{} value needs a named slot to be persisted",
            other.value_type().as_str()
        ),
    }
}

fn name_form(value: &Value) -> ExternalValue {
    match value {
        Value::Difficulty(d) => ExternalValue::Str(d.name().to_string()),
        Value::Material(m) => ExternalValue::Str(m.name().to_string()),
        Value::Status(s) => ExternalValue::Str(s.name().to_string()),
        other => panic!("{} value has no canonical name", other.value_type().as_str()),
    }
}

/// String-keyed collection of slots owned by one settings aggregate.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: HashMap<String, Slot>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain slot under `key`.
    ///
    /// Registering a key that already exists silently replaces the earlier
    /// slot and drops its value. Keys are a fixed set declared by the owner,
    /// so this never happens outside of deliberate re-declaration.
    pub fn register(&mut self, key: &str, value_type: ValueType) -> &mut Slot {
        self.register_slot(key, Slot::new(value_type))
    }

    /// Register a caller-built slot under `key`. Same replacement rule as
    /// [`Registry::register`].
    pub fn register_slot(&mut self, key: &str, slot: Slot) -> &mut Slot {
        match self.slots.entry(key.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(slot);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(slot),
        }
    }

    pub fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.get(key)
    }

    pub fn slot_mut(&mut self, key: &str) -> Option<&mut Slot> {
        self.slots.get_mut(key)
    }

    /// Current value under `key`; `None` for empty or unknown slots.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(key).and_then(Slot::get)
    }

    /// Set the value of a registered slot.
    ///
    /// # Panics
    /// If `key` was never registered, or on a type mismatch.
    #[track_caller]
    pub fn set(&mut self, key: &str, value: Option<Value>) {
        match self.slots.get_mut(key) {
            Some(slot) => slot.set_opt(value),
            None => panic!("setting '{key}' is not registered"),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Persisted mapping of every populated slot. Empty slots are omitted.
    pub fn serialize(&self) -> BTreeMap<String, ExternalValue> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.is_set())
            .map(|(key, slot)| (key.clone(), slot.external_form()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldkeeper_core::{Difficulty, Material, WorldStatus};

    #[test]
    fn test_empty_slot_reads_none() {
        let mut registry = Registry::new();
        registry.register("spawn", ValueType::Str);
        assert!(registry.contains("spawn"));
        assert_eq!(registry.get("spawn"), None);
        assert_eq!(registry.get("unknown"), None);
    }

    #[test]
    fn test_serialize_skips_empty_slots() {
        let mut registry = Registry::new();
        registry.register("spawn", ValueType::Str);
        registry.register("physics", ValueType::Bool).set(Value::Bool(false));
        registry.register("last-loaded", ValueType::Long).set(Value::Long(-1));

        let map = registry.serialize();
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("spawn"));
        assert_eq!(map["physics"], ExternalValue::Bool(false));
        assert_eq!(map["last-loaded"], ExternalValue::Int(-1));
    }

    #[test]
    fn test_named_slots_externalize_as_names() {
        let mut registry = Registry::new();
        registry.register_slot("difficulty", Slot::difficulty()).set(Difficulty::Peaceful.into());
        registry.register_slot("status", Slot::status()).set(WorldStatus::InProgress.into());
        registry
            .register_slot("material", Slot::material())
            .set(Material::from_name("oak_planks").unwrap().into());

        let map = registry.serialize();
        assert_eq!(map["difficulty"], ExternalValue::Str("PEACEFUL".into()));
        assert_eq!(map["status"], ExternalValue::Str("IN_PROGRESS".into()));
        assert_eq!(map["material"], ExternalValue::Str("OAK_PLANKS".into()));
    }

    #[test]
    fn test_reregister_replaces_slot() {
        let mut registry = Registry::new();
        registry.register("project", ValueType::Str).set("alpha".into());
        registry.register("project", ValueType::Bool);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("project"), None);
        assert_eq!(registry.slot("project").unwrap().value_type(), ValueType::Bool);
    }

    #[test]
    fn test_custom_external_form() {
        fn shouting(value: &Value) -> ExternalValue {
            match value {
                Value::Str(s) => ExternalValue::Str(s.to_uppercase()),
                _ => unreachable!(),
            }
        }

        let mut registry = Registry::new();
        registry
            .register_slot("project", Slot::with_external_form(ValueType::Str, shouting))
            .set("castle".into());
        assert_eq!(registry.serialize()["project"], ExternalValue::Str("CASTLE".into()));
    }

    #[test]
    fn test_clear_removes_from_output() {
        let mut registry = Registry::new();
        registry.register("spawn", ValueType::Str).set("0;64;0".into());
        assert!(registry.serialize().contains_key("spawn"));

        registry.set("spawn", None);
        assert!(registry.serialize().is_empty());
    }

    #[test]
    #[should_panic(expected = "slot declared as boolean cannot hold a string")]
    fn test_type_mismatch_panics() {
        let mut registry = Registry::new();
        registry.register("physics", ValueType::Bool);
        registry.set("physics", Some("yes".into()));
    }

    #[test]
    #[should_panic(expected = "external form requested for an empty")]
    fn test_external_form_of_empty_slot_panics() {
        Slot::new(ValueType::Str).external_form();
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn test_set_unknown_key_panics() {
        Registry::new().set("nope", Some(Value::Bool(true)));
    }
}
