use serde_json::{Map, Value};
use tracing::warn;

pub const DEFAULT_STATUS_ENTITY: &str = "input_boolean.baby_feeding_timer_active";
pub const DEFAULT_TITLE: &str = "Baby Tracker";

/// One counter tile on the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub entity: String,
    pub label: String,
    pub icon: String,
    pub color: String,
}

impl CounterSpec {
    fn new(entity: &str, label: &str, icon: &str, color: &str) -> Self {
        Self {
            entity: entity.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Card configuration. Set once per `configure` call and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardConfig {
    pub entity: String,
    pub title: String,
    pub counters: Vec<CounterSpec>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            entity: DEFAULT_STATUS_ENTITY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            counters: default_counters(),
        }
    }
}

impl CardConfig {
    /// Config watching `entity` with the default counter set.
    pub fn for_entity(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Self::default()
        }
    }

    pub fn with_counters(mut self, counters: Vec<CounterSpec>) -> Self {
        self.counters = counters;
        self
    }

    /// Parse card settings leniently. Unknown keys are ignored and
    /// malformed fields fall back to their defaults.
    pub fn from_settings(v: &Map<String, Value>) -> Self {
        let mut c = Self::default();
        if let Some(entity) = get_str(v, "entity").map(str::trim).filter(|s| !s.is_empty()) {
            c.entity = entity.to_string();
        }
        if let Some(title) = get_str(v, "title").map(str::trim).filter(|s| !s.is_empty()) {
            c.title = title.to_string();
        }
        match v.get("counters") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                c.counters = items.iter().filter_map(parse_counter).collect();
            }
            Some(other) => warn!(?other, "ignoring non-array counters setting"),
        }
        c
    }
}

pub fn default_counters() -> Vec<CounterSpec> {
    vec![
        CounterSpec::new("counter.baby_feeding_daily", "Feeds", "mdi:baby-bottle", "#2196F3"),
        CounterSpec::new("counter.baby_diaper_poo_daily", "Poo", "mdi:emoticon-poop", "#FF9800"),
        CounterSpec::new("counter.baby_diaper_pee_daily", "Pee", "mdi:water", "#03A9F4"),
    ]
}

fn parse_counter(v: &Value) -> Option<CounterSpec> {
    let (entity, obj) = match v {
        Value::String(s) => (s.trim(), None),
        Value::Object(m) => (get_str(m, "entity").unwrap_or("").trim(), Some(m)),
        _ => ("", None),
    };
    if entity.is_empty() {
        warn!(entry = %v, "skipping counter without entity");
        return None;
    }

    let field = |k: &str| {
        obj.and_then(|m| get_str(m, k))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    Some(CounterSpec {
        entity: entity.to_string(),
        label: field("label").unwrap_or_else(|| label_from_entity(entity)),
        icon: field("icon").unwrap_or_else(|| "mdi:counter".to_string()),
        color: field("color").unwrap_or_else(|| "#607D8B".to_string()),
    })
}

/// `counter.baby_feeding_daily` -> `baby feeding daily`
fn label_from_entity(entity: &str) -> String {
    let object_id = entity.split_once('.').map_or(entity, |(_, id)| id);
    object_id.replace('_', " ")
}

fn get_str<'a>(v: &'a Map<String, Value>, k: &str) -> Option<&'a str> {
    v.get(k)?.as_str()
}
