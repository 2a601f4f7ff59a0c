//! Presentation settings
//!
//! Window and pacing options only; gameplay rules are fixed in `consts`.
//! Read from the `PONG_SETTINGS` environment variable as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_DELAY_MS};
use crate::error::PongError;

/// Window/pacing preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    /// Initial window size (physical pixels)
    pub width: u32,
    pub height: u32,
    /// Delay between frame steps
    pub frame_delay_ms: u64,
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: DEFAULT_WIDTH as u32,
            height: DEFAULT_HEIGHT as u32,
            frame_delay_ms: FRAME_DELAY_MS,
            vsync: true,
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON settings object
    pub const ENV_VAR: &'static str = "PONG_SETTINGS";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, PongError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.width = settings.width.max(1);
        settings.height = settings.height.max(1);
        Ok(settings)
    }

    /// Load from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_delay_ms)
    }
}
