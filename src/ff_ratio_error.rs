// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

#[derive(Debug)]
pub enum FfRatioError {
    /// Filesystem access failed (e.g. listing the artifacts directory).
    Io { path: PathBuf, source: std::io::Error },
    /// The synthesis binary could not be started.
    Spawn {
        tool: PathBuf,
        source: std::io::Error,
    },
    /// The synthesis binary could not be resolved to an executable.
    ToolNotFound { tool: PathBuf, reason: String },
    /// A `--param` value was not of the form `key=value`.
    BadParam(String),
    /// The toolchain configuration could not be used.
    Config(String),
}

impl std::fmt::Display for FfRatioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FfRatioError::Io { path, source } => {
                write!(f, "ff-ratio error: I/O on {}: {}", path.display(), source)
            }
            FfRatioError::Spawn { tool, source } => write!(
                f,
                "ff-ratio error: could not run {}: {}",
                tool.display(),
                source
            ),
            FfRatioError::ToolNotFound { tool, reason } => write!(
                f,
                "ff-ratio error: synthesis tool {} not found: {}",
                tool.display(),
                reason
            ),
            FfRatioError::BadParam(param) => write!(
                f,
                "ff-ratio error: parameter {:?} is not of the form key=value",
                param
            ),
            FfRatioError::Config(msg) => write!(f, "ff-ratio error: {}", msg),
        }
    }
}

impl std::error::Error for FfRatioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FfRatioError::Io { source, .. } | FfRatioError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}
