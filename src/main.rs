// SPDX-License-Identifier: Apache-2.0

//! Command line driver that prints the flip-flop count over total cell
//! count for designs synthesized with Yosys.
//!
//! Sample usage:
//!
//! ```shell
//! $ ff-ratio                                   # every artifacts/*.il
//! $ ff-ratio --design fifo --param width=64 depth=8 --flow flatten
//! $ ff-ratio --csv --ff-size 8 --toolchain $HOME/ff-ratio-toolchain.toml
//! ```

use clap::Parser;
use ff_ratio::catalog::{discover_designs, params_from_strs, DesignSpec};
use ff_ratio::render::{render, write_json, OutputFormat};
use ff_ratio::report_cli_error::report_cli_error_and_exit;
use ff_ratio::run::{measure_designs, RunOptions};
use ff_ratio::toolchain_config::{
    get_artifacts_dir, get_ff_size, get_yosys_path, load_toolchain_config,
};
use ff_ratio::yosys::{SynthFlow, YosysTool};
use std::path::PathBuf;

fn parse_flow(s: &str) -> Result<SynthFlow, String> {
    s.parse()
}

/// Print FF count over total cell count for designs.
#[derive(Debug, Parser)]
#[command(name = "ff-ratio", version, about)]
struct Args {
    /// Path to Yosys binary
    #[arg(long)]
    yosys: Option<PathBuf>,

    /// Specific design (default: all in the artifacts directory)
    #[arg(long)]
    design: Option<String>,

    /// Design parameters (e.g., width=64)
    #[arg(long, num_args = 0..)]
    param: Vec<String>,

    /// Synthesis flow variant ("" or "flatten")
    #[arg(long, value_parser = parse_flow)]
    flow: Option<SynthFlow>,

    /// AIG-equivalent size per FF (default: 6)
    #[arg(long)]
    ff_size: Option<u64>,

    /// CSV output format
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Show yosys output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Directory holding `<tag>.il` artifacts (default: artifacts)
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Path to a toolchain TOML file with a [toolchain] table
    #[arg(long)]
    toolchain: Option<PathBuf>,

    /// Also write the results as JSON to this path
    #[arg(long)]
    output_json: Option<PathBuf>,
}

fn main() {
    let _ = env_logger::try_init();
    log::info!("ff-ratio starting; version: {}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = args.toolchain.as_ref().map(|path| {
        load_toolchain_config(path).unwrap_or_else(|e| {
            report_cli_error_and_exit(
                "could not load toolchain config",
                vec![("error", format!("{:#}", e).as_str())],
            )
        })
    });

    let artifacts_dir = get_artifacts_dir(args.artifacts_dir.as_deref(), &config);
    let ff_size = get_ff_size(args.ff_size, &config);
    let flow = args.flow.unwrap_or_default();

    let designs = match &args.design {
        Some(design) => {
            let params = params_from_strs(&args.param).unwrap_or_else(|e| {
                report_cli_error_and_exit(
                    "invalid --param",
                    vec![("error", e.to_string().as_str())],
                )
            });
            vec![DesignSpec::from_cli(design, &params)]
        }
        None => {
            if !args.param.is_empty() {
                log::warn!("--param is ignored without --design");
            }
            let tags = discover_designs(&artifacts_dir).unwrap_or_else(|e| {
                report_cli_error_and_exit(
                    "could not list artifacts",
                    vec![("error", e.to_string().as_str())],
                )
            });
            if tags.is_empty() {
                report_cli_error_and_exit(
                    &format!("No designs found in {}/", artifacts_dir.display()),
                    vec![],
                );
            }
            tags.iter().map(|tag| DesignSpec::from_tag(tag)).collect()
        }
    };

    let tool = YosysTool::new(get_yosys_path(args.yosys.as_deref(), &config));

    let options = RunOptions {
        artifacts_dir,
        flow,
        ff_size,
    };
    let results = measure_designs(&tool, &designs, &options, |spec, raw| {
        if args.verbose {
            println!("=== {} ===", spec.design);
            println!("{}", raw);
            println!();
        }
    });

    if results.is_empty() {
        report_cli_error_and_exit("No results", vec![]);
    }

    let format = if args.csv {
        OutputFormat::Csv
    } else {
        OutputFormat::Human
    };
    let stdout = std::io::stdout();
    if let Err(e) = render(&mut stdout.lock(), &results, format, ff_size) {
        report_cli_error_and_exit(
            "failed to write report",
            vec![("error", e.to_string().as_str())],
        );
    }

    if let Some(path) = &args.output_json {
        let written = std::fs::File::create(path)
            .map_err(|e| e.to_string())
            .and_then(|f| {
                write_json(std::io::BufWriter::new(f), &results).map_err(|e| e.to_string())
            });
        if let Err(e) = written {
            report_cli_error_and_exit(
                "failed to write JSON report",
                vec![
                    ("path", path.display().to_string().as_str()),
                    ("error", e.as_str()),
                ],
            );
        }
    }
}
