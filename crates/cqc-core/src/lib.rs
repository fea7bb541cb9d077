//! # complexqc Core Library
//!
//! Quantitative interface-quality metrics for predicted biomolecular
//! complexes: protein–protein, protein–ligand, and protein–nucleic-acid
//! models are classified and scored from their 3D coordinates and, for
//! ligand pockets, a per-residue confidence matrix.
//!
//! ## Architectural Philosophy
//!
//! The library is layered so that data, algorithms, and orchestration stay
//! separable and testable:
//!
//! - **[`core`]: The Foundation.** Stateless data models
//!   (`StructureModel`, `ConfidenceMatrix`), the shared residue/element
//!   classification tables, geometry helpers, file loading, and the
//!   solvent-accessible-surface capability.
//!
//! - **[`analysis`]: The Metrics.** The prediction-type classifier, the
//!   contact-detection primitive, and the per-category metric modules.
//!   Every metric is a pure function from an immutable model (plus numeric
//!   parameters) to a serializable result; unmet preconditions surface as
//!   typed `InsufficientData` errors, never as degenerate numbers.
//!
//! - **[`workflows`]: The Public API.** Ties the layers together: load a
//!   model once, classify it, run the matching metrics, and return one
//!   aggregated report.

pub mod analysis;
pub mod core;
pub mod workflows;
