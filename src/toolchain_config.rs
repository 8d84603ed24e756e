// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Path to the Yosys binary; bare names are looked up on `PATH`.
    pub yosys_path: Option<String>,

    /// Directory holding the `<tag>.il` design artifacts.
    pub artifacts_dir: Option<String>,

    /// AIG-equivalent area assumed per flip-flop.
    pub ff_size: Option<u64>,
}

#[derive(Deserialize)]
struct ToolchainFile {
    toolchain: ToolchainConfig,
}

/// Reads the `[toolchain]` table from the TOML file at `path`.
pub fn load_toolchain_config(path: &Path) -> anyhow::Result<ToolchainConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading toolchain config {}", path.display()))?;
    let file: ToolchainFile = toml::from_str(&text)
        .with_context(|| format!("parsing toolchain config {}", path.display()))?;
    log::info!("loaded toolchain config {}: {:?}", path.display(), file.toolchain);
    Ok(file.toolchain)
}

/// Picks the Yosys binary: command line flag, then the toolchain config,
/// then `yosys` on `PATH`.
pub fn get_yosys_path(flag: Option<&Path>, config: &Option<ToolchainConfig>) -> PathBuf {
    if let Some(flag) = flag {
        flag.to_path_buf()
    } else if let Some(path) = config.as_ref().and_then(|c| c.yosys_path.as_ref()) {
        PathBuf::from(path)
    } else {
        PathBuf::from("yosys")
    }
}

pub fn get_artifacts_dir(flag: Option<&Path>, config: &Option<ToolchainConfig>) -> PathBuf {
    if let Some(flag) = flag {
        flag.to_path_buf()
    } else if let Some(dir) = config.as_ref().and_then(|c| c.artifacts_dir.as_ref()) {
        PathBuf::from(dir)
    } else {
        PathBuf::from(crate::catalog::DEFAULT_ARTIFACTS_DIR)
    }
}

pub fn get_ff_size(flag: Option<u64>, config: &Option<ToolchainConfig>) -> u64 {
    flag.or_else(|| config.as_ref().and_then(|c| c.ff_size))
        .unwrap_or(crate::metrics::DEFAULT_FF_SIZE)
}
