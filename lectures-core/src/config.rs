//! User-tunable settings shared by every lecture.
//!
//! Settings are read from JSON. Every field is optional, so an empty object
//! yields the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, SENSITIVITY, SPEED};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: SPEED,
            sensitivity: SENSITIVITY,
        }
    }
}

impl CameraConfig {
    /// Copies the tuning parameters onto `camera`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.set_movement_speed(self.speed);
        camera.set_mouse_sensitivity(self.sensitivity);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LectureConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    /// Directory holding `shaders/` and `images/`.
    pub assets_dir: PathBuf,
    /// One of `error`, `warn`, `info`, `debug`, `trace` or `off`.
    pub log_level: String,
}

impl Default for LectureConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            assets_dir: PathBuf::from("assets"),
            log_level: "info".to_string(),
        }
    }
}

impl LectureConfig {
    /// Parses and validates a config. `origin` is only used in errors.
    pub fn from_json(s: &str, origin: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config: LectureConfig = serde_json::from_str(s).map_err(|source| ConfigError::Parse {
            path: origin.into(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(self.camera.speed.is_finite() && self.camera.sensitivity.is_finite()) {
            return Err(ConfigError::Invalid(
                "camera speed and sensitivity must be finite".to_string(),
            ));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level `{}`",
                self.log_level
            )));
        }
        Ok(())
    }

    /// The configured log level, falling back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn shader_path(&self, name: &str, file: &str) -> PathBuf {
        self.assets_dir.join("shaders").join(name).join(file)
    }

    pub fn image_path(&self, file: &str) -> PathBuf {
        self.assets_dir.join("images").join(file)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = LectureConfig::from_json("{}", "test.json").unwrap();
        assert_eq!(config, LectureConfig::default());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera.speed, 6.0);
    }

    #[test]
    fn test_partial_override() {
        let config = LectureConfig::from_json(
            r#"{ "window": { "width": 1280 }, "camera": { "sensitivity": 0.1 }, "log_level": "debug" }"#,
            "test.json",
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera.sensitivity, 0.1);
        assert_eq!(config.camera.speed, 6.0);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = LectureConfig::from_json(r#"{ "window": { "height": 0 } }"#, "test.json").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LectureConfig::from_json(r#"{ "log_level": "loud" }"#, "test.json").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LectureConfig::from_json("{ not json", "bad.json").unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_asset_paths() {
        let config = LectureConfig::default();
        assert_eq!(
            config.shader_path("lamp", "vert.glsl"),
            PathBuf::from("assets/shaders/lamp/vert.glsl")
        );
        assert_eq!(
            config.image_path("container2.png"),
            PathBuf::from("assets/images/container2.png")
        );
    }

    #[test]
    fn test_camera_config_applies() {
        let mut camera = Camera::default();
        CameraConfig {
            speed: 2.5,
            sensitivity: 0.5,
        }
        .apply(&mut camera);
        assert_eq!(camera.movement_speed(), 2.5);
        assert_eq!(camera.mouse_sensitivity(), 0.5);
    }
}
