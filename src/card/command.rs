use serde::Serialize;

pub const INPUT_BOOLEAN: &str = "input_boolean";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    TurnOn,
    TurnOff,
}

impl ToggleAction {
    /// The action that flips a status currently shown as `status_on`.
    pub fn inverse_of(status_on: bool) -> Self {
        if status_on { Self::TurnOff } else { Self::TurnOn }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Target {
    pub entity_id: String,
}

/// A single outbound request for the host to change an entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Command {
    pub domain: &'static str,
    pub action: ToggleAction,
    pub target: Target,
}

impl Command {
    pub fn toggle(entity_id: impl Into<String>, action: ToggleAction) -> Self {
        Self {
            domain: INPUT_BOOLEAN,
            action,
            target: Target { entity_id: entity_id.into() },
        }
    }
}

/// Host side of command submission. Fire-and-forget: the outcome only
/// ever comes back as a later state update.
pub trait CommandDispatcher {
    fn dispatch(&self, command: Command);
}
