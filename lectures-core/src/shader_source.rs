//! Loading shader sources and reporting shader build failures.

use std::{fmt, path::{Path, PathBuf}};

/// Largest compiler or linker log kept in an error, in bytes.
pub const INFO_LOG_CAPACITY: usize = 512;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Why a shader program could not be built.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read shader source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
    #[error("failed to create shader object: {0}")]
    Create(String),
}

/// Reads a shader source file into a string.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, ShaderError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Trims a driver info log and caps it at [`INFO_LOG_CAPACITY`] bytes without
/// splitting a character.
pub fn bounded_log(log: &str) -> String {
    let log = log.trim_end_matches(['\0', '\n', '\r', ' ']);
    if log.len() <= INFO_LOG_CAPACITY {
        return log.to_string();
    }

    let mut end = INFO_LOG_CAPACITY;
    while !log.is_char_boundary(end) {
        end -= 1;
    }
    log[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source() {
        let path = std::env::temp_dir().join(format!("lectures-core-{}.vert", std::process::id()));
        std::fs::write(&path, "#version 330 core\nvoid main() {}\n").unwrap();
        let source = read_source(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(source.starts_with("#version 330 core"));
    }

    #[test]
    fn test_read_missing_source_names_path() {
        let err = read_source("does/not/exist.frag").unwrap_err();
        assert!(matches!(err, ShaderError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.frag"));
    }

    #[test]
    fn test_bounded_log_trims_and_caps() {
        assert_eq!(bounded_log("0:1(1): error\n\0"), "0:1(1): error");

        let long = "é".repeat(INFO_LOG_CAPACITY);
        let bounded = bounded_log(&long);
        assert!(bounded.len() <= INFO_LOG_CAPACITY);
        assert_eq!(bounded.chars().count(), INFO_LOG_CAPACITY / 2);
    }

    #[test]
    fn test_compile_error_message() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "syntax error".to_string(),
        };
        assert_eq!(err.to_string(), "fragment shader failed to compile:\nsyntax error");
    }
}
