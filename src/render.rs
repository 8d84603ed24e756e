// SPDX-License-Identifier: Apache-2.0

//! Text, CSV and JSON renderings of result records.

use crate::metrics::ResultRecord;
use std::io::Write;

pub const CSV_HEADER: &str =
    "design,ff,logic,total,ff_ratio,abc_area,ff_area,total_area,ff_area_pct";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Csv,
}

pub fn csv_row(r: &ResultRecord) -> String {
    format!(
        "{},{},{},{},{:.4},{},{},{},{:.2}",
        r.design,
        r.ff,
        r.logic,
        r.total,
        r.ff_ratio,
        r.abc_area,
        r.ff_area,
        r.total_area,
        r.ff_area_pct
    )
}

pub fn human_line(r: &ResultRecord) -> String {
    format!(
        "{}: {}/{} FF ({:.1}%), area: {} logic + {} FF = {} ({:.1}% FF)",
        r.design,
        r.ff,
        r.total,
        r.ff_ratio * 100.0,
        r.abc_area,
        r.ff_area,
        r.total_area,
        r.ff_area_pct
    )
}

/// Writes `records` to `out` in the given format. Human output is prefixed
/// with the flip-flop area weight used for the run.
pub fn render<W: Write>(
    out: &mut W,
    records: &[ResultRecord],
    format: OutputFormat,
    ff_size: u64,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Csv => {
            writeln!(out, "{}", CSV_HEADER)?;
            for r in records {
                writeln!(out, "{}", csv_row(r))?;
            }
        }
        OutputFormat::Human => {
            writeln!(out, "(ff_size={})", ff_size)?;
            for r in records {
                writeln!(out, "{}", human_line(r))?;
            }
        }
    }
    Ok(())
}

/// Writes `records` as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: W, records: &[ResultRecord]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, records)
}
