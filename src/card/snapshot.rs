use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

/// Current state of one host entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityState {
    pub value: String,
    pub attributes: Map<String, Value>,
}

impl EntityState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            attributes: Map::new(),
        }
    }

    /// Accepts `{ "state": .. }` (host shape) or `{ "value": .. }`.
    /// Scalars are stringified; anything that is not an object is rejected.
    pub fn from_json(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        let value = match obj.get("state").or_else(|| obj.get("value")) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        };
        let attributes = obj
            .get("attributes")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Some(Self { value, attributes })
    }
}

/// Read access to the host's entity states.
pub trait StateReader {
    fn read(&self, entity_id: &str) -> Option<EntityState>;
}

/// Entity states delivered on one update tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    entities: HashMap<String, EntityState>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, entity_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(entity_id, EntityState::new(value));
        self
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, state: EntityState) {
        self.entities.insert(entity_id.into(), state);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn from_json(v: &Value) -> Self {
        let mut snap = Self::default();
        let Some(map) = v.as_object() else {
            return snap;
        };
        for (id, entry) in map {
            match EntityState::from_json(entry) {
                Some(state) => snap.insert(id.clone(), state),
                None => warn!(entity = %id, "skipping malformed snapshot entry"),
            }
        }
        snap
    }
}

impl StateReader for Snapshot {
    fn read(&self, entity_id: &str) -> Option<EntityState> {
        self.entities.get(entity_id).cloned()
    }
}
