pub mod command;
pub mod config;
pub mod snapshot;
pub mod surface;
pub mod view;

use tracing::debug;

use command::CommandDispatcher;
use config::{CardConfig, DEFAULT_TITLE};
use snapshot::StateReader;
use surface::Surface;
use view::ViewModel;

/// Layout hint reported to the host, in card rows.
pub const CARD_SIZE: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Unconfigured,
    Loading,
    Rendered { status_on: bool },
}

/// Reactive tracker card.
///
/// The card is a pure reflection of host state: every `on_update` throws
/// away the previous surface and builds a new one from the latest
/// snapshot. Clicking never changes local state; the host confirms the
/// change through a later update.
#[derive(Debug, Default)]
pub struct TrackerWidget {
    config: Option<CardConfig>,
    surface: Option<Surface>,
}

impl TrackerWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `config`, replacing any previous one wholesale.
    pub fn configure(&mut self, config: CardConfig) {
        debug!(entity = %config.entity, counters = config.counters.len(), "configured");
        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Re-derive and re-render from `states`. Safe to call for any host
    /// change, relevant or not.
    pub fn on_update(&mut self, states: &dyn StateReader) {
        let next = match &self.config {
            None => Surface::loading(DEFAULT_TITLE),
            Some(config) => {
                let view = ViewModel::derive(config, states);
                debug!(
                    status_on = view.status_on,
                    counters = ?view.counters.iter().map(|c| c.value).collect::<Vec<_>>(),
                    "rendering"
                );
                Surface::build(config, view)
            }
        };
        // Single swap: the old surface and its handler go away together.
        self.surface = Some(next);
    }

    /// Fire the handler bound to the current action control. Returns
    /// whether a command was dispatched.
    pub fn click(&self, dispatcher: &dyn CommandDispatcher) -> bool {
        match self.surface.as_ref().and_then(Surface::control).and_then(|c| c.handler()) {
            Some(handler) => {
                handler.fire(dispatcher);
                true
            }
            None => {
                debug!("click ignored, no action control");
                false
            }
        }
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn state(&self) -> WidgetState {
        match (&self.config, self.surface.as_ref().and_then(Surface::view)) {
            (None, _) => WidgetState::Unconfigured,
            (Some(_), None) => WidgetState::Loading,
            (Some(_), Some(view)) => WidgetState::Rendered { status_on: view.status_on },
        }
    }

    pub fn report_size(&self) -> u32 {
        CARD_SIZE
    }
}
