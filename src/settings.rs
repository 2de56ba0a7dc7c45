//! Render settings persisted in localStorage.

use serde::{Deserialize, Serialize};

use crate::util::clog;

pub const STORAGE_KEY: &str = "arena_render_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    pub background_color: String,
    /// Grid line color.
    pub line_color: String,
    /// Draw rounded mass under each cell's name.
    pub show_mass: bool,
    pub border_draw: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background_color: "#f2fbff".to_string(),
            line_color: "#000000".to_string(),
            show_mass: false,
            border_draw: false,
        }
    }
}

impl RenderSettings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    match Self::from_json(&raw) {
                        Ok(s) => return s,
                        Err(e) => clog(&format!("ignoring stored settings: {}", e)),
                    }
                }
            }
        }
        Self::default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Persists the settings; returns whether they were written.
    pub fn save(&self) -> bool {
        let raw = match self.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                clog(&format!("could not encode settings: {}", e));
                return false;
            }
        };
        let store = match web_sys::window().map(|win| win.local_storage()) {
            Some(Ok(Some(store))) => store,
            _ => {
                clog("could not save settings: localStorage unavailable");
                return false;
            }
        };
        match store.set_item(STORAGE_KEY, &raw) {
            Ok(()) => true,
            Err(e) => {
                clog(&format!("could not save settings: {:?}", e));
                false
            }
        }
    }
}
