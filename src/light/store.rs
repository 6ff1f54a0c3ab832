use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::seed;
use crate::error::{SeedError, StoreError};
use crate::model::{Light, LightSummary, LightUpdate};

/// In-memory set of lights keyed by id.
///
/// Every operation holds the lock for its whole duration, so an existence
/// check and the mutation that follows it cannot interleave with another
/// writer. Iteration order of [`LightStore::list`] is unspecified.
#[derive(Debug, Default)]
pub struct LightStore {
    lights: RwLock<HashMap<String, Light>>,
}

impl LightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds from the file at `path`, or from the built-in lights when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        Ok(Self::from_map(seed::load(path)?))
    }

    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        Ok(Self::from_map(seed::parse(text)?))
    }

    fn from_map(lights: HashMap<String, Light>) -> Self {
        LightStore {
            lights: RwLock::new(lights),
        }
    }

    // Each mutation is a single map operation, so a poisoned lock never
    // guards a half-applied change.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Light>> {
        self.lights.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Light>> {
        self.lights.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<LightSummary> {
        self.read().values().map(Light::summary).collect()
    }

    pub fn get(&self, id: &str) -> Result<Light, StoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Adds a light. An empty `id` is replaced with a fresh uppercase UUID.
    pub fn create(&self, mut light: Light) -> Result<Light, StoreError> {
        if light.id.is_empty() {
            light.id = Uuid::new_v4().to_string().to_uppercase();
        }

        let mut lights = self.write();
        if lights.contains_key(&light.id) {
            return Err(StoreError::DuplicateId(light.id));
        }
        lights.insert(light.id.clone(), light.clone());
        Ok(light)
    }

    pub fn update(&self, id: &str, update: LightUpdate) -> Result<Light, StoreError> {
        let mut lights = self.write();
        let light = lights
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if update.is_empty() {
            return Err(StoreError::InvalidUpdate);
        }
        light.apply(update);
        Ok(light.clone())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
