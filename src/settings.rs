//! Locating and loading the lecture configuration file.

use std::path::PathBuf;

use lectures_core::{ConfigError, LectureConfig};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GL_LECTURES_CONFIG";
/// Config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "lectures.json";

/// Candidate config paths, most specific first.
pub fn candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("gl-lectures").join("config.json"));
    }
    paths
}

/// Loads the first existing config file, or the defaults when there is none.
/// A file that exists but cannot be read or parsed is an error.
pub fn load() -> Result<(LectureConfig, Option<PathBuf>), ConfigError> {
    for path in candidates() {
        if !path.is_file() {
            continue;
        }
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = LectureConfig::from_json(&text, &path)?;
        return Ok((config, Some(path)));
    }
    Ok((LectureConfig::default(), None))
}
