mod actions;
mod state;
mod topics;

use streamdeck_lib::prelude::*;
use tracing::info;

use actions::tracker::TrackerAction;

pub const PLUGIN_ID: &str = "icu.veelume.babytracker";

fn main() -> anyhow::Result<()> {
    let _guard = init(PLUGIN_ID);
    info!(card = baby_tracker_card::CARD_NAME, "Starting Baby Tracker Stream Deck plugin");

    let plugin = Plugin::new().add_action(ActionFactory::default_of::<TrackerAction>());

    run_plugin(plugin)
}
