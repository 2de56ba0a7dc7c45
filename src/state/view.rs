use serde::{Deserialize, Serialize};

use crate::model::{Screen, Snapshot};
use crate::render::canvas::Canvas;
use crate::render::{draw_error_message, draw_frame};
use crate::settings::RenderSettings;
use crate::state::Camera;

pub const WAITING_MESSAGE: &str = "Waiting for game state...";

/// Messages the game client posts to the renderer window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    Snapshot(Snapshot),
    /// e.g. "Disconnected!" or "You were kicked!"
    Error { message: String },
    Settings(RenderSettings),
}

impl HostMessage {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Everything the draw loop carries between frames.
#[derive(Debug, Default)]
pub struct ViewState {
    pub camera: Camera,
    pub snapshot: Option<Snapshot>,
    pub error: Option<String>,
    pub settings: RenderSettings,
}

impl ViewState {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings, ..Default::default() }
    }

    /// Returns true when the settings changed and should be persisted.
    pub fn apply(&mut self, msg: HostMessage) -> bool {
        match msg {
            HostMessage::Snapshot(s) => {
                self.snapshot = Some(s);
                self.error = None;
                false
            }
            HostMessage::Error { message } => {
                self.error = Some(message);
                false
            }
            HostMessage::Settings(s) => {
                let changed = s != self.settings;
                self.settings = s;
                changed
            }
        }
    }

    /// Overlay text to show instead of the game, if any.
    pub fn overlay_message(&self) -> Option<&str> {
        match (&self.error, &self.snapshot) {
            (Some(e), _) => Some(e),
            (None, None) => Some(WAITING_MESSAGE),
            (None, Some(_)) => None,
        }
    }

    /// Draws one animation frame. This is the only path that steps the
    /// camera's zoom filter, so it must run once per frame.
    pub fn draw(&mut self, ctx: &mut impl Canvas, screen: Screen) {
        if let Some(msg) = self.overlay_message() {
            draw_error_message(ctx, msg, screen);
            return;
        }
        if let Some(snapshot) = &self.snapshot {
            draw_frame(ctx, &mut self.camera, snapshot, &self.settings, screen);
        }
    }
}
