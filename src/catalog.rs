// SPDX-License-Identifier: Apache-2.0

//! Locating design artifacts: discovery of `<tag>.il` files and the tag
//! naming scheme for parameterized designs.

use crate::ff_ratio_error::FfRatioError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const ARTIFACT_EXTENSION: &str = "il";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// One unit of work: a design and the tag naming its artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignSpec {
    pub design: String,
    pub tag: String,
}

impl DesignSpec {
    /// A discovered artifact; its stem serves as both design and tag.
    pub fn from_tag(tag: &str) -> Self {
        DesignSpec {
            design: tag.to_string(),
            tag: tag.to_string(),
        }
    }

    /// A design named on the command line, tagged with its parameter
    /// overrides (if any).
    pub fn from_cli(design: &str, params: &BTreeMap<String, String>) -> Self {
        let tag = if params.is_empty() {
            design.to_string()
        } else {
            format!("{}_{}", design, fmt_params(params))
        };
        DesignSpec {
            design: design.to_string(),
            tag,
        }
    }
}

/// Parses `key=value` strings. Values may themselves contain `=`; a repeated
/// key keeps its last value.
pub fn params_from_strs(params: &[String]) -> Result<BTreeMap<String, String>, FfRatioError> {
    let mut result = BTreeMap::new();
    for param in params {
        let (key, value) = param
            .split_once('=')
            .ok_or_else(|| FfRatioError::BadParam(param.clone()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(FfRatioError::BadParam(param.clone()));
        }
        result.insert(key.to_string(), value.trim().to_string());
    }
    Ok(result)
}

/// Canonical tag suffix for a parameter set: `k1=v1_k2=v2`, sorted by key.
pub fn fmt_params(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("_")
}

pub fn artifact_path(artifacts_dir: &Path, tag: &str) -> PathBuf {
    artifacts_dir.join(format!("{}.{}", tag, ARTIFACT_EXTENSION))
}

/// Returns the tags of all `*.il` files directly inside `artifacts_dir`,
/// sorted. A directory that does not exist has no designs.
pub fn discover_designs(artifacts_dir: &Path) -> Result<Vec<String>, FfRatioError> {
    let io_err = |source| FfRatioError::Io {
        path: artifacts_dir.to_path_buf(),
        source,
    };
    let entries = match std::fs::read_dir(artifacts_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("artifacts directory {} does not exist", artifacts_dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_err(e)),
    };

    let mut tags = Vec::new();
    for entry in entries {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(ARTIFACT_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            tags.push(stem.to_string());
        } else {
            log::warn!("skipping artifact with non UTF-8 name: {}", path.display());
        }
    }
    tags.sort();
    log::debug!("discovered {} designs in {}", tags.len(), artifacts_dir.display());
    Ok(tags)
}
