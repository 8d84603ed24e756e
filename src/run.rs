// SPDX-License-Identifier: Apache-2.0

//! The per-design measurement loop: synthesize, extract, compute.

use crate::catalog::{artifact_path, DesignSpec};
use crate::extract::extract_counts;
use crate::metrics::{compute_metrics, ResultRecord};
use crate::yosys::{run_synthesis, SynthFlow, SynthesisTool};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub artifacts_dir: PathBuf,
    pub flow: SynthFlow,
    pub ff_size: u64,
}

/// Measures each design in order and returns one record per design that
/// could be synthesized.
///
/// Designs whose artifact is missing, or for which the tool could not be
/// started, are reported on stderr and skipped. `on_raw_output` sees the
/// raw tool text for every synthesized design (used for `--verbose`).
pub fn measure_designs(
    tool: &dyn SynthesisTool,
    designs: &[DesignSpec],
    options: &RunOptions,
    mut on_raw_output: impl FnMut(&DesignSpec, &str),
) -> Vec<ResultRecord> {
    let mut results = Vec::new();
    for spec in designs {
        let path = artifact_path(&options.artifacts_dir, &spec.tag);
        if !path.exists() {
            eprintln!("Artifact not found: {}", path.display());
            continue;
        }

        let raw = match run_synthesis(tool, &path, options.flow) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("{}: {}", spec.tag, e);
                continue;
            }
        };
        let counts = extract_counts(&raw);
        on_raw_output(spec, &raw);

        if counts.total_cells == 0 {
            log::warn!(
                "{}: no cell count found in yosys output; ratios will read as 0",
                spec.tag
            );
        }
        results.push(compute_metrics(&spec.tag, &counts, options.ff_size));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ff_ratio_error::FfRatioError;
    use std::cell::Cell;

    struct FixtureTool {
        text: &'static str,
        calls: Cell<usize>,
    }

    impl SynthesisTool for FixtureTool {
        fn run_script(&self, _script: &str) -> Result<String, FfRatioError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.text.to_string())
        }
    }

    struct UnstartableTool;

    impl SynthesisTool for UnstartableTool {
        fn run_script(&self, _script: &str) -> Result<String, FfRatioError> {
            Err(FfRatioError::Spawn {
                tool: PathBuf::from("yosys"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    fn options(dir: &std::path::Path) -> RunOptions {
        RunOptions {
            artifacts_dir: dir.to_path_buf(),
            flow: SynthFlow::Default,
            ff_size: 6,
        }
    }

    #[test]
    fn test_measures_present_designs_in_order_and_skips_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("b.il"), "").unwrap();
        std::fs::write(temp_dir.path().join("a.il"), "").unwrap();
        let tool = FixtureTool {
            text: "42 objects.\n137 objects.\n   130 cells\nand = 50\nand = 50\n",
            calls: Cell::new(0),
        };
        let designs = vec![
            DesignSpec::from_tag("b"),
            DesignSpec::from_tag("missing"),
            DesignSpec::from_tag("a"),
        ];
        let mut seen = Vec::new();
        let results = measure_designs(&tool, &designs, &options(temp_dir.path()), |spec, raw| {
            seen.push((spec.design.clone(), raw.len()));
        });

        assert_eq!(tool.calls.get(), 2);
        assert_eq!(seen.len(), 2);
        let tags: Vec<&str> = results.iter().map(|r| r.design.as_str()).collect();
        assert_eq!(tags, vec!["b", "a"]);
        assert_eq!(results[0].ff, 42);
        assert_eq!(results[0].total, 130);
        assert_eq!(results[0].total_area, 352);
    }

    #[test]
    fn test_all_missing_yields_no_results() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tool = FixtureTool {
            text: "",
            calls: Cell::new(0),
        };
        let results = measure_designs(
            &tool,
            &[DesignSpec::from_tag("ghost")],
            &options(temp_dir.path()),
            |_, _| {},
        );
        assert!(results.is_empty());
        assert_eq!(tool.calls.get(), 0);
    }

    #[test]
    fn test_unparseable_output_still_produces_zero_record() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("d.il"), "").unwrap();
        let tool = FixtureTool {
            text: "ERROR: segfault\n",
            calls: Cell::new(0),
        };
        let results = measure_designs(
            &tool,
            &[DesignSpec::from_tag("d")],
            &options(temp_dir.path()),
            |_, _| {},
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ff_ratio, 0.0);
        assert_eq!(results[0].ff_area_pct, 0.0);
    }

    #[test]
    fn test_spawn_failure_skips_design() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("d.il"), "").unwrap();
        let results = measure_designs(
            &UnstartableTool,
            &[DesignSpec::from_tag("d")],
            &options(temp_dir.path()),
            |_, _| {},
        );
        assert!(results.is_empty());
    }
}
