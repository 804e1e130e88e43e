use streamdeck_lib::TopicId;

/// Published whenever an entity in the global store changes.
/// Subscribed by `TrackerAction`, which re-renders on every change.
pub const ENTITY_CHANGED: TopicId<EntityChanged> = TopicId::new("entity_changed");

#[derive(Clone, Debug)]
pub struct EntityChanged {
    pub entity_id: String,
}
