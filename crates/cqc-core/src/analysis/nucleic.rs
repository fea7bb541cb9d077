//! Protein–nucleic-acid interface metrics.

use super::contacts::{ContactFinder, GridContacts};
use super::error::{AnalysisError, AnalysisResult};
use super::round3;
use crate::core::chem::{is_nucleic_residue, is_phosphate_atom, is_positive_residue, is_protein_residue};
use crate::core::geometry::{mean_vector, std_dev};
use crate::core::models::system::StructureModel;
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Default contact cutoff for charged protein–phosphate contacts.
pub const DEFAULT_ELECTROSTATIC_CUTOFF: f64 = 4.5;

/// Default contact cutoff for groove engagement.
pub const DEFAULT_GROOVE_CUTOFF: f64 = 5.0;

/// Density of charged protein contacts against the nucleic-acid backbone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectrostaticContactDensity {
    pub charged_contacts: usize,
    pub interface_residues: usize,
    pub electrostatic_contact_density: f64,
    #[serde(rename = "distance_cutoff_angstrom")]
    pub cutoff: f64,
}

/// Geometric consistency of protein contacts along the nucleic backbone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrooveConsistency {
    pub contact_pairs: usize,
    pub projection_std_dev: f64,
    pub groove_consistency_score: f64,
    #[serde(rename = "distance_cutoff_angstrom")]
    pub cutoff: f64,
}

/// Counts contacts between positively charged protein residues (ARG, LYS,
/// HIS — all their atoms, not only the charged groups) and backbone
/// phosphate atoms of nucleic residues, then normalizes by the number of
/// distinct protein residues participating.
///
/// # Errors
///
/// `InsufficientData` if either atom set is empty.
pub fn electrostatic_contact_density(
    model: &StructureModel,
    cutoff: f64,
) -> AnalysisResult<ElectrostaticContactDensity> {
    let mut protein_positions: Vec<Point3<f64>> = Vec::new();
    let mut protein_residue_ids: Vec<isize> = Vec::new();
    let mut phosphate_positions: Vec<Point3<f64>> = Vec::new();

    for (_, chain) in model.chains_in_order() {
        for &residue_id in chain.residues() {
            let Some(residue) = model.residue(residue_id) else {
                continue;
            };
            if is_positive_residue(&residue.name) {
                for atom in model.residue_atoms(residue_id) {
                    protein_positions.push(atom.position);
                    protein_residue_ids.push(residue.id);
                }
            } else if is_nucleic_residue(&residue.name) {
                for atom in model.residue_atoms(residue_id) {
                    if is_phosphate_atom(&atom.name) {
                        phosphate_positions.push(atom.position);
                    }
                }
            }
        }
    }

    if protein_positions.is_empty() || phosphate_positions.is_empty() {
        return Err(AnalysisError::insufficient(
            "electrostatic_contact_density",
            "no positively charged protein atoms or no phosphate atoms",
        ));
    }

    let pairs = GridContacts.contact_pairs(&protein_positions, &phosphate_positions, cutoff);
    let interface: HashSet<isize> = pairs.iter().map(|&(i, _)| protein_residue_ids[i]).collect();

    let density = pairs.len() as f64 / interface.len().max(1) as f64;
    debug!(
        contacts = pairs.len(),
        residues = interface.len(),
        "electrostatic interface measured"
    );

    Ok(ElectrostaticContactDensity {
        charged_contacts: pairs.len(),
        interface_residues: interface.len(),
        electrostatic_contact_density: round3(density),
        cutoff,
    })
}

/// Scores how geometrically consistent the protein's engagement of the
/// nucleic groove is: the spread of the protein−nucleic displacement vectors
/// around their mean, mapped through `1/(1+σ)` into `(0, 1]`.
///
/// # Errors
///
/// `InsufficientData` if either atom set is empty or fewer than two contact
/// pairs exist.
pub fn groove_consistency(
    model: &StructureModel,
    cutoff: f64,
) -> AnalysisResult<GrooveConsistency> {
    let mut protein_positions: Vec<Point3<f64>> = Vec::new();
    let mut nucleic_positions: Vec<Point3<f64>> = Vec::new();

    for (_, chain) in model.chains_in_order() {
        for &residue_id in chain.residues() {
            let Some(residue) = model.residue(residue_id) else {
                continue;
            };
            if is_protein_residue(&residue.name) {
                protein_positions.extend(model.residue_atoms(residue_id).map(|a| a.position));
            } else if is_nucleic_residue(&residue.name) {
                nucleic_positions.extend(model.residue_atoms(residue_id).map(|a| a.position));
            }
        }
    }

    if protein_positions.is_empty() || nucleic_positions.is_empty() {
        return Err(AnalysisError::insufficient(
            "groove_consistency",
            "protein or nucleic acid atoms missing",
        ));
    }

    let pairs = GridContacts.contact_pairs(&protein_positions, &nucleic_positions, cutoff);
    if pairs.len() < 2 {
        return Err(AnalysisError::insufficient(
            "groove_consistency",
            format!("found {} groove contacts, need at least 2", pairs.len()),
        ));
    }

    let vectors: Vec<Vector3<f64>> = pairs
        .iter()
        .map(|&(i, j)| protein_positions[i] - nucleic_positions[j])
        .collect();
    // Both are Some: at least two vectors exist here.
    let Some(mean) = mean_vector(&vectors) else {
        unreachable!("contact vectors are non-empty");
    };
    let deviations: Vec<f64> = vectors.iter().map(|v| (v - mean).norm()).collect();
    let Some(spread) = std_dev(&deviations) else {
        unreachable!("deviations are non-empty");
    };

    let score = 1.0 / (1.0 + spread);
    debug!(contacts = pairs.len(), spread, "groove engagement measured");

    Ok(GrooveConsistency {
        contact_pairs: pairs.len(),
        projection_std_dev: round3(spread),
        groove_consistency_score: round3(score),
        cutoff,
    })
}
