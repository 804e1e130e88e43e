use super::config::CardConfig;
use super::snapshot::StateReader;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterView {
    pub label: String,
    pub icon: String,
    pub color: String,
    pub value: i64,
}

/// Render-ready state, derived from scratch on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub status_on: bool,
    pub counters: Vec<CounterView>,
}

impl ViewModel {
    pub fn derive(config: &CardConfig, states: &dyn StateReader) -> Self {
        let status_on = states
            .read(&config.entity)
            .is_some_and(|s| is_on(&s.value));

        let counters = config
            .counters
            .iter()
            .map(|spec| CounterView {
                label: spec.label.clone(),
                icon: spec.icon.clone(),
                color: spec.color.clone(),
                value: states
                    .read(&spec.entity)
                    .map_or(0, |s| parse_count(&s.value)),
            })
            .collect();

        Self { status_on, counters }
    }
}

/// Closed two-state read: only the literal `on` counts.
pub fn is_on(value: &str) -> bool {
    value == "on"
}

/// Counter states are numeric strings; anything else reads as zero.
pub fn parse_count(value: &str) -> i64 {
    let t = value.trim();
    if let Ok(n) = t.parse::<i64>() {
        return n;
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::config::CounterSpec;
    use crate::card::snapshot::Snapshot;

    fn config() -> CardConfig {
        CardConfig::for_entity("input_boolean.x").with_counters(vec![
            CounterSpec {
                entity: "counter.a".into(),
                label: "A".into(),
                icon: "mdi:a".into(),
                color: "#000".into(),
            },
            CounterSpec {
                entity: "counter.b".into(),
                label: "B".into(),
                icon: "mdi:b".into(),
                color: "#fff".into(),
            },
        ])
    }

    #[test]
    fn only_literal_on_is_on() {
        for v in ["off", "unavailable", "unknown", "", "ON", "On", " on", "true", "1"] {
            assert!(!is_on(v), "{v:?} should read as off");
        }
        assert!(is_on("on"));
    }

    #[test]
    fn parse_count_degrades_to_zero() {
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("-2"), -2);
        assert_eq!(parse_count("4.0"), 4);
        assert_eq!(parse_count("7.9"), 7);
        assert_eq!(parse_count("unknown"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("NaN"), 0);
        assert_eq!(parse_count("inf"), 0);
    }

    #[test]
    fn derives_in_config_order() {
        let snap = Snapshot::new()
            .with("input_boolean.x", "on")
            .with("counter.b", "5")
            .with("counter.a", "3");
        let vm = ViewModel::derive(&config(), &snap);
        assert!(vm.status_on);
        let values: Vec<_> = vm.counters.iter().map(|c| (c.label.as_str(), c.value)).collect();
        assert_eq!(values, [("A", 3), ("B", 5)]);
    }

    #[test]
    fn missing_keys_default_to_idle_and_zero() {
        let vm = ViewModel::derive(&config(), &Snapshot::new());
        assert!(!vm.status_on);
        assert!(vm.counters.iter().all(|c| c.value == 0));
        assert_eq!(vm.counters.len(), 2);
    }
}
