// SPDX-License-Identifier: Apache-2.0

//! Measures how much of a design is flip-flops.
//!
//! Each design artifact (`<tag>.il`, RTLIL) is run through Yosys with
//! technology mapping disabled; the flip-flop and total cell counts are then
//! pulled out of the textual report alongside the AIG node count that ABC
//! prints, and combined into a ratio and an area estimate.

pub mod catalog;
pub mod cell_types;
pub mod extract;
pub mod ff_ratio_error;
pub mod metrics;
pub mod render;
pub mod report_cli_error;
pub mod run;
pub mod toolchain_config;
pub mod yosys;
