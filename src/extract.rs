// SPDX-License-Identifier: Apache-2.0

//! Recovers cell counts and ABC area from the text Yosys prints for the
//! script built by [`crate::yosys::build_script`].
//!
//! Matching is best effort: anything not found counts as zero.

use once_cell::sync::Lazy;
use regex::Regex;

/// `select -count` prints `<N> objects.` once per query.
static OBJECTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+) objects").unwrap());

/// The `Number of cells` summary line of `stat`, e.g. `     130 cells`.
static CELLS_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(\d+)\s+cells\s*$").unwrap());

/// ABC `print_stats` reports the AIG node count as `and = <N>`.
static ABC_AND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\band\s*=\s*(\d+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractedCounts {
    pub ff_count: u64,
    pub total_cells: u64,
    pub abc_area: u64,
}

fn parse_count(digits: &str) -> u64 {
    match digits.parse::<u64>() {
        Ok(n) => n,
        Err(e) => {
            log::warn!("count {:?} does not fit in u64 ({}); using 0", digits, e);
            0
        }
    }
}

/// Extracts flip-flop count, total cell count and ABC area from raw Yosys
/// output.
///
/// * The first `N objects` is the flip-flop count.
/// * The total comes from the `stat` cells line when present, otherwise
///   from the second `N objects` (the `select -count *` query), otherwise 0.
/// * Every `and = N` is summed into the ABC area.
pub fn extract_counts(raw: &str) -> ExtractedCounts {
    let objects: Vec<u64> = OBJECTS_RE
        .captures_iter(raw)
        .map(|caps| parse_count(&caps[1]))
        .collect();
    let ff_count = objects.first().copied().unwrap_or(0);
    let total_from_select = objects.get(1).copied().unwrap_or(0);

    let total_cells = match CELLS_LINE_RE.captures(raw) {
        Some(caps) => parse_count(&caps[1]),
        None => total_from_select,
    };

    let abc_area = ABC_AND_RE
        .captures_iter(raw)
        .map(|caps| parse_count(&caps[1]))
        .fold(0u64, |acc, n| acc.saturating_add(n));

    log::debug!(
        "extract_counts; objects: {:?}; total_cells: {}; abc_area: {}",
        objects,
        total_cells,
        abc_area
    );
    ExtractedCounts {
        ff_count,
        total_cells,
        abc_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Trimmed-down capture of the interesting parts of a Yosys run.
    const SAMPLE_OUTPUT: &str = "\
-- Running command `select -count t:$sr t:$ff t:$dff' --
42 objects.

-- Running command `select -count *' --
137 objects.

3. Printing statistics.

=== counter ===

   Number of wires:                 12
   Number of wire bits:             70
        130 cells
     $_AND_                         40
     $_DFF_P_                       42

4. Executing ABC pass.
ABC: netlist                       : i/o =   10/   12  lat =    0  and =     50  lev =  6
ABC: netlist                       : i/o =   10/   12  lat =    0  and =     50  lev =  5
";

    #[test]
    fn test_empty_text_yields_zero_counts() {
        assert_eq!(extract_counts(""), ExtractedCounts::default());
    }

    #[test]
    fn test_garbage_text_yields_zero_counts() {
        let raw = "ERROR: Can't open input file `missing.il' for reading\n";
        assert_eq!(extract_counts(raw), ExtractedCounts::default());
    }

    #[test]
    fn test_sample_output() {
        assert_eq!(
            extract_counts(SAMPLE_OUTPUT),
            ExtractedCounts {
                ff_count: 42,
                total_cells: 130,
                abc_area: 100,
            }
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        assert_eq!(extract_counts(SAMPLE_OUTPUT), extract_counts(SAMPLE_OUTPUT));
    }

    #[test]
    fn test_total_falls_back_to_second_objects_match() {
        let raw = "12 objects.\n99 objects.\n";
        let counts = extract_counts(raw);
        assert_eq!(counts.ff_count, 12);
        assert_eq!(counts.total_cells, 99);
    }

    #[test]
    fn test_cells_line_overrides_second_objects_match() {
        let raw = "12 objects.\n99 objects.\n   77 cells\n";
        let counts = extract_counts(raw);
        assert_eq!(counts.ff_count, 12);
        assert_eq!(counts.total_cells, 77);
    }

    #[test]
    fn test_single_objects_match_and_no_cells_line() {
        let counts = extract_counts("5 objects.\n");
        assert_eq!(counts.ff_count, 5);
        assert_eq!(counts.total_cells, 0);
    }

    #[test]
    fn test_cells_word_inside_a_longer_line_is_not_the_summary() {
        let raw = "1 objects.\n2 objects.\nNumber of cells with 3 cells inside\n";
        assert_eq!(extract_counts(raw).total_cells, 2);
    }

    #[test]
    fn test_abc_area_sums_every_match() {
        let raw = "and = 10\nstuff\nand =20 lev = 3\nnand and = 5\n";
        assert_eq!(extract_counts(raw).abc_area, 35);
    }

    #[test]
    fn test_abc_area_requires_word_boundary() {
        assert_eq!(extract_counts("band = 10\n").abc_area, 0);
    }

    #[test]
    fn test_oversized_count_is_treated_as_zero() {
        let raw = "99999999999999999999999 objects.\n4 objects.\n";
        let counts = extract_counts(raw);
        assert_eq!(counts.ff_count, 0);
        assert_eq!(counts.total_cells, 4);
    }
}
