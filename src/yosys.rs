// SPDX-License-Identifier: Apache-2.0

//! Helpers for driving the external Yosys binary: script construction and
//! process invocation.

use crate::cell_types::ff_select_query;
use crate::ff_ratio_error::FfRatioError;
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which `synth` recipe to run before counting cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SynthFlow {
    #[default]
    Default,
    /// Inline the hierarchy before synthesis (`synth -flatten`).
    Flatten,
}

impl SynthFlow {
    pub fn synth_command(self) -> &'static str {
        match self {
            SynthFlow::Default => "synth -noabc",
            SynthFlow::Flatten => "synth -flatten -noabc",
        }
    }
}

impl std::str::FromStr for SynthFlow {
    type Err = String;

    /// Accepts the flow names used on the command line; the empty string
    /// selects the default flow. The `Display` name "default" is for logs
    /// only and is not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(SynthFlow::Default),
            "flatten" => Ok(SynthFlow::Flatten),
            other => Err(format!(
                "unknown flow {:?}; expected \"\" or \"flatten\"",
                other
            )),
        }
    }
}

impl std::fmt::Display for SynthFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthFlow::Default => write!(f, "default"),
            SynthFlow::Flatten => write!(f, "flatten"),
        }
    }
}

/// Builds the Yosys script that reads `artifact_path`, synthesizes it without
/// technology mapping, and reports the counts consumed by
/// [`crate::extract::extract_counts`].
///
/// The two `select -count` queries must stay in this order: the first
/// reported object count is the flip-flop count.
pub fn build_script(artifact_path: &Path, flow: SynthFlow) -> String {
    format!(
        "\nread_rtlil {}\n{}\nselect -count {}\nselect -count *\nstat\nabc -script +strash;print_stats\n",
        artifact_path.display(),
        flow.synth_command(),
        ff_select_query()
    )
}

/// Something that can execute a Yosys script and hand back its textual
/// output.
pub trait SynthesisTool {
    /// Runs `script` and returns stdout followed by stderr. A failing exit
    /// status is not an error here; only failure to run at all is.
    fn run_script(&self, script: &str) -> Result<String, FfRatioError>;
}

/// The real Yosys binary. The configured path is resolved on first use, so
/// a run where no artifact exists never needs Yosys at all.
#[derive(Debug)]
pub struct YosysTool {
    tool: PathBuf,
    resolved: OnceCell<PathBuf>,
}

impl YosysTool {
    pub fn new(tool: PathBuf) -> Self {
        YosysTool {
            tool,
            resolved: OnceCell::new(),
        }
    }

    /// Resolves the configured tool the way a shell would: bare names are
    /// looked up on `PATH`, anything with a separator must point at an
    /// executable.
    pub fn resolved_path(&self) -> Result<&Path, FfRatioError> {
        let path = self.resolved.get_or_try_init(|| {
            let path = which::which(&self.tool).map_err(|e| FfRatioError::ToolNotFound {
                tool: self.tool.clone(),
                reason: e.to_string(),
            })?;
            log::info!("using yosys at {}", path.display());
            Ok::<_, FfRatioError>(path)
        })?;
        Ok(path.as_path())
    }
}

impl SynthesisTool for YosysTool {
    fn run_script(&self, script: &str) -> Result<String, FfRatioError> {
        let path = self.resolved_path()?;
        let mut command = Command::new(path);
        command.arg("-p").arg(script);

        log::info!("Running command: {:?}", command);
        let output = command.output().map_err(|e| FfRatioError::Spawn {
            tool: path.to_path_buf(),
            source: e,
        })?;

        log::debug!(
            "yosys exited with {}; stdout: {} bytes; stderr: {} bytes",
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );
        if !output.status.success() {
            log::warn!("yosys exited with status {}", output.status);
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}

/// Synthesizes the artifact at `artifact_path` with `tool` and returns the
/// raw report text.
pub fn run_synthesis(
    tool: &dyn SynthesisTool,
    artifact_path: &Path,
    flow: SynthFlow,
) -> Result<String, FfRatioError> {
    log::info!(
        "run_synthesis; artifact: {}; flow: {}",
        artifact_path.display(),
        flow
    );
    let script = build_script(artifact_path, flow);
    tool.run_script(&script)
}
