//! The metric modules: category classification, contact detection, and the
//! per-category interface-quality computations.

pub mod contacts;
pub mod error;
pub mod interface;
pub mod ligand;
pub mod nucleic;
pub mod prediction;

/// Rounds to two decimal places (reported areas, distances, percentages).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to three decimal places (reported scores and overlaps).
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
