//! Seed data for the light store.
//!
//! A seed document is either a JSON array of lights, each carrying its own
//! `id`, or a JSON object keyed by id. In the keyed form a record may omit
//! its `id`; if present it must match the key.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::SeedError;
use crate::model::Light;

/// Ten sample lights spanning five rooms.
pub const DEFAULT_LIGHTS: &str = include_str!("default_lights.json");

/// Loads the lights file when a path is given, the built-in set otherwise.
pub fn load(path: Option<&Path>) -> Result<HashMap<String, Light>, SeedError> {
    match path {
        Some(path) => read(path),
        None => parse(DEFAULT_LIGHTS),
    }
}

pub fn read(path: &Path) -> Result<HashMap<String, Light>, SeedError> {
    let text = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<HashMap<String, Light>, SeedError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => from_array(items),
        Value::Object(entries) => from_object(entries),
        Value::Null => Err(SeedError::UnexpectedShape("null")),
        Value::Bool(_) => Err(SeedError::UnexpectedShape("a boolean")),
        Value::Number(_) => Err(SeedError::UnexpectedShape("a number")),
        Value::String(_) => Err(SeedError::UnexpectedShape("a string")),
    }
}

fn from_array(items: Vec<Value>) -> Result<HashMap<String, Light>, SeedError> {
    let mut lights = HashMap::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let light: Light = serde_json::from_value(item)?;
        if light.id.is_empty() {
            return Err(SeedError::MissingId(index));
        }
        if lights.contains_key(&light.id) {
            return Err(SeedError::DuplicateId(light.id));
        }
        lights.insert(light.id.clone(), light);
    }
    Ok(lights)
}

fn from_object(
    entries: serde_json::Map<String, Value>,
) -> Result<HashMap<String, Light>, SeedError> {
    let mut lights = HashMap::with_capacity(entries.len());
    for (key, item) in entries {
        let mut light: Light = serde_json::from_value(item)?;
        if light.id.is_empty() {
            light.id = key.clone();
        } else if light.id != key {
            return Err(SeedError::IdMismatch { key, id: light.id });
        }
        lights.insert(key, light);
    }
    Ok(lights)
}
