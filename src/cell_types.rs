// SPDX-License-Identifier: Apache-2.0

//! Yosys cell types that hold state (flip-flops and latches).
//!
//! The list covers the word-level `$dff`-style cells as well as the
//! gate-level `$_DFF_*` family that `synth` leaves behind after
//! `dfflegalize`. Polarity letters follow the Yosys naming scheme (`N`/`P`
//! for clock/enable/reset polarity, `0`/`1` for reset value).

/// Sequential cell types, in the order they appear in the generated select
/// query.
pub const FF_CELL_TYPES: &[&str] = &[
    // Word-level
    "$sr",
    "$ff",
    "$dff",
    "$dffe",
    "$dffsr",
    "$dffsre",
    "$adff",
    "$adffe",
    "$aldff",
    "$aldffe",
    "$sdff",
    "$sdffe",
    "$sdffce",
    "$dlatch",
    "$adlatch",
    "$dlatchsr",
    // Gate-level DFF variants
    "$_DFF_N_",
    "$_DFF_P_",
    "$_DFF_NN0_",
    "$_DFF_NN1_",
    "$_DFF_NP0_",
    "$_DFF_NP1_",
    "$_DFF_PN0_",
    "$_DFF_PN1_",
    "$_DFF_PP0_",
    "$_DFF_PP1_",
    "$_DFFE_NN_",
    "$_DFFE_NP_",
    "$_DFFE_PN_",
    "$_DFFE_PP_",
    "$_DFFE_NN0N_",
    "$_DFFE_NN0P_",
    "$_DFFE_NN1N_",
    "$_DFFE_NN1P_",
    "$_DFFE_NP0N_",
    "$_DFFE_NP0P_",
    "$_DFFE_NP1N_",
    "$_DFFE_NP1P_",
    "$_DFFE_PN0N_",
    "$_DFFE_PN0P_",
    "$_DFFE_PN1N_",
    "$_DFFE_PN1P_",
    "$_DFFE_PP0N_",
    "$_DFFE_PP0P_",
    "$_DFFE_PP1N_",
    "$_DFFE_PP1P_",
    "$_DFFSR_NNN_",
    "$_DFFSR_NNP_",
    "$_DFFSR_NPN_",
    "$_DFFSR_NPP_",
    "$_DFFSR_PNN_",
    "$_DFFSR_PNP_",
    "$_DFFSR_PPN_",
    "$_DFFSR_PPP_",
    "$_DFFSRE_NNNN_",
    "$_DFFSRE_NNNP_",
    "$_DFFSRE_NNPN_",
    "$_DFFSRE_NNPP_",
    "$_DFFSRE_NPNN_",
    "$_DFFSRE_NPNP_",
    "$_DFFSRE_NPPN_",
    "$_DFFSRE_NPPP_",
    "$_DFFSRE_PNNN_",
    "$_DFFSRE_PNNP_",
    "$_DFFSRE_PNPN_",
    "$_DFFSRE_PNPP_",
    "$_DFFSRE_PPNN_",
    "$_DFFSRE_PPNP_",
    "$_DFFSRE_PPPN_",
    "$_DFFSRE_PPPP_",
    "$_SDFF_NN0_",
    "$_SDFF_NN1_",
    "$_SDFF_NP0_",
    "$_SDFF_NP1_",
    "$_SDFF_PN0_",
    "$_SDFF_PN1_",
    "$_SDFF_PP0_",
    "$_SDFF_PP1_",
    "$_SDFFE_NN0N_",
    "$_SDFFE_NN0P_",
    "$_SDFFE_NN1N_",
    "$_SDFFE_NN1P_",
    "$_SDFFE_NP0N_",
    "$_SDFFE_NP0P_",
    "$_SDFFE_NP1N_",
    "$_SDFFE_NP1P_",
    "$_SDFFE_PN0N_",
    "$_SDFFE_PN0P_",
    "$_SDFFE_PN1N_",
    "$_SDFFE_PN1P_",
    "$_SDFFE_PP0N_",
    "$_SDFFE_PP0P_",
    "$_SDFFE_PP1N_",
    "$_SDFFE_PP1P_",
    "$_SDFFCE_NN0N_",
    "$_SDFFCE_NN0P_",
    "$_SDFFCE_NN1N_",
    "$_SDFFCE_NN1P_",
    "$_SDFFCE_NP0N_",
    "$_SDFFCE_NP0P_",
    "$_SDFFCE_NP1N_",
    "$_SDFFCE_NP1P_",
    "$_SDFFCE_PN0N_",
    "$_SDFFCE_PN0P_",
    "$_SDFFCE_PN1N_",
    "$_SDFFCE_PN1P_",
    "$_SDFFCE_PP0N_",
    "$_SDFFCE_PP0P_",
    "$_SDFFCE_PP1N_",
    "$_SDFFCE_PP1P_",
    // Latches
    "$_DLATCH_N_",
    "$_DLATCH_P_",
    "$_DLATCH_NN0_",
    "$_DLATCH_NN1_",
    "$_DLATCH_NP0_",
    "$_DLATCH_NP1_",
    "$_DLATCH_PN0_",
    "$_DLATCH_PN1_",
    "$_DLATCH_PP0_",
    "$_DLATCH_PP1_",
    "$_DLATCHSR_NNN_",
    "$_DLATCHSR_NNP_",
    "$_DLATCHSR_NPN_",
    "$_DLATCHSR_NPP_",
    "$_DLATCHSR_PNN_",
    "$_DLATCHSR_PNP_",
    "$_DLATCHSR_PPN_",
    "$_DLATCHSR_PPP_",
    // Async load
    "$_ALDFF_NN_",
    "$_ALDFF_NP_",
    "$_ALDFF_PN_",
    "$_ALDFF_PP_",
    "$_ALDFFE_NNN_",
    "$_ALDFFE_NNP_",
    "$_ALDFFE_NPN_",
    "$_ALDFFE_NPP_",
    "$_ALDFFE_PNN_",
    "$_ALDFFE_PNP_",
    "$_ALDFFE_PPN_",
    "$_ALDFFE_PPP_",
    // SR latches
    "$_SR_NN_",
    "$_SR_NP_",
    "$_SR_PN_",
    "$_SR_PP_",
];

/// Returns the `select` pattern matching every cell in [`FF_CELL_TYPES`],
/// e.g. `t:$sr t:$ff t:$dff ...`.
pub fn ff_select_query() -> String {
    FF_CELL_TYPES
        .iter()
        .map(|t| format!("t:{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}
