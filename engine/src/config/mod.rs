//! Controller Configuration
//!
//! Every tunable of the view and locomotion controllers in one struct that
//! loads from and saves to JSON. Missing fields fall back to defaults, so a
//! file only needs the values it changes:
//!
//! ```json
//! { "mouse_sensitivity": 45.0, "jump_height": 2.0, "gamepad_look_reset": "on_device_switch" }
//! ```
//!
//! The step functions never check their configuration; a negative jump height
//! or upward gravity just produces NaN. [`ControllerConfig::validate`] is the
//! place to catch those, at load time.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::ViewConfig;
use crate::player::LocomotionConfig;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading, saving or validating a config.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// A value breaks the controller's expectations.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Complete controller configuration, serialized as one flat JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerConfig {
    #[serde(flatten)]
    pub view: ViewConfig,
    #[serde(flatten)]
    pub locomotion: LocomotionConfig,
}

impl ControllerConfig {
    /// Parse from a JSON string. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        info!("loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Write to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check every value against what the controllers assume.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let view = &self.view;
        let loco = &self.locomotion;

        let checks: [(bool, String); 9] = [
            (
                view.mouse_sensitivity.is_finite(),
                format!("mouse_sensitivity must be finite, got {}", view.mouse_sensitivity),
            ),
            (
                view.min_pitch <= view.max_pitch,
                format!(
                    "min_pitch ({}) must not exceed max_pitch ({})",
                    view.min_pitch, view.max_pitch
                ),
            ),
            (
                (0.0..=1.0).contains(&view.gamepad_look_lerp),
                format!("gamepad_look_lerp must be in [0, 1], got {}", view.gamepad_look_lerp),
            ),
            (
                loco.move_speed >= 0.0,
                format!("move_speed must be non-negative, got {}", loco.move_speed),
            ),
            (
                loco.sprint_speed >= 0.0,
                format!("sprint_speed must be non-negative, got {}", loco.sprint_speed),
            ),
            (
                loco.jump_height >= 0.0,
                format!("jump_height must be non-negative, got {}", loco.jump_height),
            ),
            (
                loco.gravity < 0.0,
                format!("gravity must be negative, got {}", loco.gravity),
            ),
            (
                loco.grounded_stick_force <= 0.0,
                format!(
                    "grounded_stick_force must not be positive, got {}",
                    loco.grounded_stick_force
                ),
            ),
            (
                loco.jump_velocity().is_finite(),
                "jump_height and gravity give a non-finite take-off speed".to_string(),
            ),
        ];

        match checks.into_iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(ConfigError::Invalid(msg)),
            None => Ok(()),
        }
    }
}
