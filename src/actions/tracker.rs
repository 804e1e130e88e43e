use baby_tracker_card::{CardConfig, TrackerWidget};
use streamdeck_lib::prelude::*;
use tracing::debug;

use crate::state::{GlobalsHost, load_snapshot};
use crate::topics::ENTITY_CHANGED;

/// One Stream Deck key showing the tracker card. Key settings configure
/// the card; the global entity store feeds it.
#[derive(Default)]
pub struct TrackerAction {
    widget: TrackerWidget,
}

impl ActionStatic for TrackerAction {
    const ID: &'static str = super::ids::TRACKER;
}

impl Action for TrackerAction {
    fn id(&self) -> &str {
        Self::ID
    }

    fn topics(&self) -> &'static [&'static str] {
        &[ENTITY_CHANGED.name]
    }

    fn init(&mut self, cx: &Context, ctx_id: &str) {
        cx.sd().get_settings(ctx_id);
        self.refresh(cx, ctx_id);
    }

    fn did_receive_settings(&mut self, cx: &Context, ev: &incoming::DidReceiveSettings) {
        self.widget.configure(CardConfig::from_settings(&ev.settings));
        self.refresh(cx, ev.context);
    }

    fn key_up(&mut self, cx: &Context, _ev: &incoming::KeyUp) {
        // The key image only changes once the store reports the new state.
        self.widget.click(&GlobalsHost::new(cx));
    }

    fn on_notify(&mut self, cx: &Context, ctx_id: &str, event: &ErasedTopic) {
        if let Some(n) = event.downcast(ENTITY_CHANGED) {
            debug!(entity = %n.entity_id, ctx = ctx_id, "entity changed");
            self.refresh(cx, ctx_id);
        }
    }
}

impl TrackerAction {
    fn refresh(&mut self, cx: &Context, ctx_id: &str) {
        let snapshot = load_snapshot(cx);
        self.widget.on_update(&snapshot);
        if let Some(surface) = self.widget.surface() {
            cx.sd().set_image(ctx_id, Some(surface.to_data_url()), None, None);
        }
    }
}
