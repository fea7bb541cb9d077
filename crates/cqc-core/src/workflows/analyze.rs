//! The end-to-end analysis workflow: load a model once, classify it, run the
//! metrics matching its category, and aggregate them into one report.

use crate::analysis::error::{AnalysisError, AnalysisResult};
use crate::analysis::interface::{
    self, BuriedSurfaceArea, ContactResidueOverlap, DEFAULT_OVERLAP_CUTOFF,
};
use crate::analysis::ligand::{
    self, DEFAULT_POCKET_CUTOFF, DEFAULT_VDW_SCALE, LigandBurial, PocketConsistency, StericClashes,
};
use crate::analysis::nucleic::{
    self, DEFAULT_ELECTROSTATIC_CUTOFF, DEFAULT_GROOVE_CUTOFF, ElectrostaticContactDensity,
    GrooveConsistency,
};
use crate::analysis::prediction::{PredictionType, detect_prediction_type};
use crate::core::io::confidence::ConfidenceMatrix;
use crate::core::io::loader::load_structure;
use crate::core::models::system::StructureModel;
use crate::core::surface::{DEFAULT_PROBE_RADIUS, VoronotaSurface};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

const NO_METRICS_MESSAGE: &str = "No analysis metrics implemented for this prediction type.";

/// Tunable parameters of one analysis run.
///
/// Injected explicitly into every call; nothing in the engine reads global
/// state. `Default` carries the standard cutoffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Cutoff for charged protein–phosphate contacts (Å).
    pub electrostatic_cutoff: f64,
    /// Cutoff for groove contact collection (Å).
    pub groove_cutoff: f64,
    /// Cutoff around the ligand centroid for pocket membership (Å).
    pub pocket_cutoff: f64,
    /// Atom-distance cutoff for residue-level interface contacts (Å).
    pub overlap_cutoff: f64,
    /// Scale applied to summed Van-der-Waals radii for clash detection.
    pub vdw_scale: f64,
    /// Solvent probe radius for surface-area evaluation (Å).
    pub probe_radius: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            electrostatic_cutoff: DEFAULT_ELECTROSTATIC_CUTOFF,
            groove_cutoff: DEFAULT_GROOVE_CUTOFF,
            pocket_cutoff: DEFAULT_POCKET_CUTOFF,
            overlap_cutoff: DEFAULT_OVERLAP_CUTOFF,
            vdw_scale: DEFAULT_VDW_SCALE,
            probe_radius: DEFAULT_PROBE_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinLigandMetrics {
    #[serde(rename = "ligand_burial_percentage")]
    pub ligand_burial: LigandBurial,
    pub pocket_consistency: PocketConsistency,
    pub steric_clashes: StericClashes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinProteinMetrics {
    pub buried_surface_area: BuriedSurfaceArea,
    pub contact_residue_overlap: ContactResidueOverlap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinNucleicMetrics {
    pub electrostatic_contact_density: ElectrostaticContactDensity,
    pub groove_consistency: GrooveConsistency,
}

/// Aggregated result of one analysis run: the category plus exactly one
/// populated metrics block (or only a message for protein-only models).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub prediction_type: PredictionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_ligand_metrics: Option<ProteinLigandMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_protein_metrics: Option<ProteinProteinMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_dna_rna_metrics: Option<ProteinNucleicMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisReport {
    fn bare(prediction_type: PredictionType) -> Self {
        Self {
            prediction_type,
            protein_ligand_metrics: None,
            protein_protein_metrics: None,
            protein_dna_rna_metrics: None,
            message: None,
        }
    }
}

/// Runs the full analysis over coordinate and confidence files.
///
/// The confidence matrix is only loaded (and only required) when the model
/// classifies as protein–ligand; other categories ignore `confidence_path`.
///
/// # Errors
///
/// Loader and confidence errors are propagated unchanged;
/// [`AnalysisError::ConfidenceRequired`] if a protein–ligand model comes
/// without a confidence path; metric preconditions surface as
/// `InsufficientData`.
#[instrument(skip_all, name = "analysis_workflow", fields(structure = %structure_path.display()))]
pub fn analyze_files(
    structure_path: &Path,
    confidence_path: Option<&Path>,
    options: &AnalysisOptions,
) -> AnalysisResult<AnalysisReport> {
    let model = load_structure(structure_path)?;
    let prediction_type = detect_prediction_type(&model);

    let confidence = match (prediction_type, confidence_path) {
        (PredictionType::ProteinLigand, Some(path)) => Some(ConfidenceMatrix::from_npz(path)?),
        (PredictionType::ProteinLigand, None) => {
            return Err(AnalysisError::ConfidenceRequired(prediction_type));
        }
        _ => None,
    };

    analyze_model(&model, confidence.as_ref(), options)
}

/// Runs the category-matched metrics over an already loaded model.
///
/// # Errors
///
/// [`AnalysisError::ConfidenceRequired`] if a protein–ligand model comes
/// without a confidence matrix; otherwise the first failing metric's error.
pub fn analyze_model(
    model: &StructureModel,
    confidence: Option<&ConfidenceMatrix>,
    options: &AnalysisOptions,
) -> AnalysisResult<AnalysisReport> {
    let prediction_type = detect_prediction_type(model);
    info!(%prediction_type, atoms = model.atom_count(), "running analysis");

    let surface = VoronotaSurface::new(options.probe_radius);
    let mut report = AnalysisReport::bare(prediction_type);

    match prediction_type {
        PredictionType::ProteinLigand => {
            let confidence = confidence
                .ok_or(AnalysisError::ConfidenceRequired(prediction_type))?;
            report.protein_ligand_metrics = Some(ProteinLigandMetrics {
                ligand_burial: ligand::ligand_burial(model, &surface)?,
                pocket_consistency: ligand::pocket_consistency(
                    model,
                    confidence,
                    options.pocket_cutoff,
                )?,
                steric_clashes: ligand::steric_clashes(model, options.vdw_scale)?,
            });
        }
        PredictionType::ProteinProtein => {
            report.protein_protein_metrics = Some(ProteinProteinMetrics {
                buried_surface_area: interface::buried_surface_area(model, &surface)?,
                contact_residue_overlap: interface::contact_residue_overlap(
                    model,
                    options.overlap_cutoff,
                )?,
            });
        }
        PredictionType::ProteinDnaRna => {
            report.protein_dna_rna_metrics = Some(ProteinNucleicMetrics {
                electrostatic_contact_density: nucleic::electrostatic_contact_density(
                    model,
                    options.electrostatic_cutoff,
                )?,
                groove_consistency: nucleic::groove_consistency(model, options.groove_cutoff)?,
            });
        }
        PredictionType::ProteinOnly => {
            report.message = Some(NO_METRICS_MESSAGE.to_string());
        }
    }

    info!(%prediction_type, "analysis finished");
    Ok(report)
}
