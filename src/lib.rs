pub mod card;
pub mod render;

pub use card::{
    TrackerWidget, WidgetState,
    command::{Command, CommandDispatcher, Target, ToggleAction},
    config::{CardConfig, CounterSpec},
    snapshot::{EntityState, Snapshot, StateReader},
    surface::{ActionControl, ActionHandler, Affordance, Surface},
    view::{CounterView, ViewModel},
};

pub const CARD_TYPE: &str = "baby-tracker-card";
pub const CARD_NAME: &str = "Baby Tracker Card";
pub const CARD_DESCRIPTION: &str = "A custom card for Baby Tracker integration";
