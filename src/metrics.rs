// SPDX-License-Identifier: Apache-2.0

//! Derived flip-flop ratio and area figures for one design.

use crate::extract::ExtractedCounts;
use serde::Serialize;

/// Assumed area of one flip-flop, in AIG nodes.
pub const DEFAULT_FF_SIZE: u64 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Design tag (design name plus canonical parameter suffix).
    pub design: String,
    pub ff: u64,
    /// `total - ff`; negative values indicate the counts were extracted
    /// inconsistently and are reported as-is.
    pub logic: i128,
    pub total: u64,
    pub ff_ratio: f64,
    pub abc_area: u64,
    pub ff_area: u64,
    pub total_area: u64,
    pub ff_area_pct: f64,
}

/// Computes the result record for `design` from its extracted counts, given
/// the per-flip-flop area weight `ff_size`.
pub fn compute_metrics(design: &str, counts: &ExtractedCounts, ff_size: u64) -> ResultRecord {
    let ff = counts.ff_count;
    let total = counts.total_cells;
    let logic = total as i128 - ff as i128;
    let ff_ratio = if total > 0 {
        ff as f64 / total as f64
    } else {
        0.0
    };
    let ff_area = ff.saturating_mul(ff_size);
    let total_area = counts.abc_area.saturating_add(ff_area);
    let ff_area_pct = if total_area > 0 {
        ff_area as f64 / total_area as f64 * 100.0
    } else {
        0.0
    };
    ResultRecord {
        design: design.to_string(),
        ff,
        logic,
        total,
        ff_ratio,
        abc_area: counts.abc_area,
        ff_area,
        total_area,
        ff_area_pct,
    }
}
