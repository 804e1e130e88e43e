use tracing::info;

use super::command::{Command, CommandDispatcher, ToggleAction};
use super::config::CardConfig;
use super::view::ViewModel;
use crate::render;

/// What the action control offers to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Start,
    Stop,
}

impl Affordance {
    pub fn for_status(status_on: bool) -> Self {
        if status_on { Self::Stop } else { Self::Start }
    }
}

/// Input handler bound to the action control. The command is fixed when
/// the surface is drawn, so a click always acts on what was on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionHandler {
    command: Command,
}

impl ActionHandler {
    pub fn capture(entity_id: &str, status_on: bool) -> Self {
        Self {
            command: Command::toggle(entity_id, ToggleAction::inverse_of(status_on)),
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn fire(&self, dispatcher: &dyn CommandDispatcher) {
        info!(
            domain = self.command.domain,
            action = self.command.action.as_str(),
            entity = %self.command.target.entity_id,
            "dispatching command"
        );
        dispatcher.dispatch(self.command.clone());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionControl {
    affordance: Affordance,
    handler: Option<ActionHandler>,
}

impl ActionControl {
    fn new(affordance: Affordance) -> Self {
        Self { affordance, handler: None }
    }

    /// Binds `handler`, replacing any previous one.
    pub fn attach(&mut self, handler: ActionHandler) {
        self.handler = Some(handler);
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance
    }

    pub fn handler(&self) -> Option<&ActionHandler> {
        self.handler.as_ref()
    }

    pub fn handler_count(&self) -> usize {
        usize::from(self.handler.is_some())
    }
}

/// One rendered frame: markup plus the interactive control, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    markup: String,
    view: Option<ViewModel>,
    control: Option<ActionControl>,
}

impl Surface {
    /// Neutral surface shown before the card has a configuration.
    pub fn loading(title: &str) -> Self {
        Self {
            markup: render::render_loading(title),
            view: None,
            control: None,
        }
    }

    /// Builds a complete surface for `view`, handler already bound.
    pub fn build(config: &CardConfig, view: ViewModel) -> Self {
        let markup = render::render_card(&config.title, &view);
        let mut control = ActionControl::new(Affordance::for_status(view.status_on));
        control.attach(ActionHandler::capture(&config.entity, view.status_on));
        Self {
            markup,
            view: Some(view),
            control: Some(control),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    pub fn control(&self) -> Option<&ActionControl> {
        self.control.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_none()
    }

    pub fn to_data_url(&self) -> String {
        render::svg_data_url(&self.markup)
    }
}
