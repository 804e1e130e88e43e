use baby_tracker_card::{Command, CommandDispatcher, Snapshot, ToggleAction, card::command::INPUT_BOOLEAN};
use serde_json::{Map, Value};
use streamdeck_lib::Context;
use tracing::warn;

use crate::topics::{ENTITY_CHANGED, EntityChanged};

/// Entity states live in global settings under `entities`, keyed by
/// entity id, in the host's `{ "state", "attributes" }` shape.
const ENTITIES: &str = "entities";

/// Take the whole entity store as one snapshot.
pub fn load_snapshot(cx: &Context) -> Snapshot {
    cx.globals()
        .get(ENTITIES)
        .map(|v| Snapshot::from_json(&v))
        .unwrap_or_default()
}

/// Write an entity's state, keeping its attributes. Does NOT publish
/// `ENTITY_CHANGED`; callers do that once the write is done.
pub fn write_state(cx: &Context, entity_id: &str, state: &str) {
    cx.globals().with_mut(|m| apply_state(m, entity_id, state));
}

fn apply_state(m: &mut Map<String, Value>, entity_id: &str, state: &str) {
    let obj = m
        .entry(ENTITIES.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !obj.is_object() {
        *obj = Value::Object(Map::new());
    }
    let Some(map) = obj.as_object_mut() else {
        return;
    };
    let entry = map
        .entry(entity_id.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Some(e) = entry.as_object_mut() {
        e.insert("state".to_string(), Value::from(state));
    }
}

/// The store value a toggle command leaves behind, or `None` for
/// commands this store can't apply.
fn toggle_state(command: &Command) -> Option<&'static str> {
    if command.domain != INPUT_BOOLEAN {
        return None;
    }
    Some(match command.action {
        ToggleAction::TurnOn => "on",
        ToggleAction::TurnOff => "off",
    })
}

/// Command sink backed by the global entity store.
pub struct GlobalsHost<'a> {
    cx: &'a Context,
}

impl<'a> GlobalsHost<'a> {
    pub fn new(cx: &'a Context) -> Self {
        Self { cx }
    }
}

impl CommandDispatcher for GlobalsHost<'_> {
    fn dispatch(&self, command: Command) {
        let Some(state) = toggle_state(&command) else {
            warn!(domain = command.domain, "unsupported command domain");
            return;
        };
        let entity_id = command.target.entity_id;
        write_state(self.cx, &entity_id, state);
        self.cx
            .bus()
            .publish_t(ENTITY_CHANGED, EntityChanged { entity_id });
    }
}
