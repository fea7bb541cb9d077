//! Protein–ligand interface metrics.

use super::error::{AnalysisError, AnalysisResult};
use super::{round2, round3};
use crate::core::chem::{
    LIGAND_MIN_ATOMS, ResidueClass, classify_residue, vdw_radius,
};
use crate::core::geometry::{centroid, mean, std_dev};
use crate::core::io::confidence::ConfidenceMatrix;
use crate::core::models::system::StructureModel;
use crate::core::surface::{SurfaceAtom, SurfaceCalculator};
use nalgebra::Point3;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Default cutoff around the ligand centroid for pocket membership.
pub const DEFAULT_POCKET_CUTOFF: f64 = 4.5;

/// Default scale applied to summed Van-der-Waals radii for clash detection.
pub const DEFAULT_VDW_SCALE: f64 = 0.75;

/// Clash count at which the clash score saturates at 1.
const CLASH_SCORE_SATURATION: f64 = 20.0;

/// How much of the ligand surface is buried by complex formation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LigandBurial {
    pub sasa_free_ligand: f64,
    pub sasa_bound_ligand: f64,
    pub ligand_burial_percent: f64,
}

/// Geometric compactness of the binding pocket weighted by model confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PocketConsistency {
    pub pocket_residue_count: usize,
    pub mean_distance: f64,
    pub distance_std_dev: f64,
    pub mean_pocket_pae: f64,
    pub geometric_score: f64,
    pub confidence_score: f64,
    pub pocket_consistency_score: f64,
}

/// Steric clash count and severity between protein and ligand atoms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StericClashes {
    pub clash_count: usize,
    pub worst_overlap_angstrom: f64,
    pub clash_score: f64,
}

/// Groups atom indices (into the model-order atom list) by residue name and
/// picks the ligand: a name outside all classification sets whose atom group
/// reaches [`LIGAND_MIN_ATOMS`]. Largest group wins; ties go to the
/// lexicographically smallest name, so selection is reproducible.
fn select_ligand_group<'m>(
    model: &'m StructureModel,
) -> Option<(&'m str, Vec<usize>)> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, (_, atom)) in model.atoms_in_order().enumerate() {
        let Some(residue) = model.residue(atom.residue_id) else {
            continue;
        };
        groups.entry(&residue.name).or_default().push(index);
    }

    let mut selected: Option<(&str, Vec<usize>)> = None;
    for (name, indices) in groups {
        if classify_residue(name) != ResidueClass::Other || indices.len() < LIGAND_MIN_ATOMS {
            continue;
        }
        let larger = match &selected {
            None => true,
            Some((_, current)) => indices.len() > current.len(),
        };
        if larger {
            selected = Some((name, indices));
        }
    }
    selected
}

/// Computes the ligand burial percentage from the surface-area difference
/// between the ligand evaluated inside the complex and in isolation.
///
/// # Errors
///
/// `InsufficientData` if no residue name qualifies as a ligand, or the free
/// ligand has no positive surface area; surface capability failures are
/// propagated.
pub fn ligand_burial<S: SurfaceCalculator>(
    model: &StructureModel,
    surface: &S,
) -> AnalysisResult<LigandBurial> {
    let (ligand_name, ligand_indices) = select_ligand_group(model).ok_or_else(|| {
        AnalysisError::insufficient("ligand_burial", "no ligand candidate residue detected")
    })?;
    debug!(
        ligand = ligand_name,
        atoms = ligand_indices.len(),
        "ligand selected for burial"
    );

    let complex_atoms: Vec<SurfaceAtom> = model
        .atoms_in_order()
        .map(|(_, atom)| SurfaceAtom::from_atom(atom))
        .collect();
    let areas = surface.atom_areas(&complex_atoms)?;
    let bound: f64 = ligand_indices.iter().map(|&i| areas[i]).sum();

    let ligand_atoms: Vec<SurfaceAtom> =
        ligand_indices.iter().map(|&i| complex_atoms[i]).collect();
    let free = surface.total_area(&ligand_atoms)?;
    if free <= 0.0 {
        return Err(AnalysisError::insufficient(
            "ligand_burial",
            "ligand has no accessible surface in isolation",
        ));
    }

    let burial_percent = (free - bound) / free * 100.0;

    Ok(LigandBurial {
        sasa_free_ligand: round2(free),
        sasa_bound_ligand: round2(bound),
        ligand_burial_percent: round2(burial_percent),
    })
}

/// Scores the binding pocket: geometric compactness of the protein atoms
/// near the ligand centroid, times a confidence factor from the per-residue
/// diagonal of the confidence matrix.
///
/// # Errors
///
/// `InsufficientData` if there are no ligand atoms, no protein atoms within
/// the cutoff of the ligand centroid, or no pocket residue with an in-bounds
/// confidence entry.
pub fn pocket_consistency(
    model: &StructureModel,
    confidence: &ConfidenceMatrix,
    cutoff: f64,
) -> AnalysisResult<PocketConsistency> {
    let mut protein_atoms: Vec<(Point3<f64>, isize)> = Vec::new();
    let mut ligand_positions: Vec<Point3<f64>> = Vec::new();

    for (_, chain) in model.chains_in_order() {
        for &residue_id in chain.residues() {
            let Some(residue) = model.residue(residue_id) else {
                continue;
            };
            match classify_residue(&residue.name) {
                ResidueClass::Protein => {
                    protein_atoms.extend(
                        model
                            .residue_atoms(residue_id)
                            .map(|atom| (atom.position, residue.id)),
                    );
                }
                ResidueClass::Excluded => {}
                // Anything that is neither protein nor solvent belongs to
                // the bound entity here, nucleotides included.
                ResidueClass::Nucleic | ResidueClass::Other => {
                    ligand_positions.extend(model.residue_atoms(residue_id).map(|a| a.position));
                }
            }
        }
    }

    if ligand_positions.is_empty() {
        return Err(AnalysisError::insufficient(
            "pocket_consistency",
            "no ligand atoms found",
        ));
    }
    let Some(center) = centroid(&ligand_positions) else {
        return Err(AnalysisError::insufficient(
            "pocket_consistency",
            "no ligand atoms found",
        ));
    };

    let mut pocket_distances: Vec<f64> = Vec::new();
    let mut pocket_residue_ids: HashSet<isize> = HashSet::new();
    for (position, residue_number) in &protein_atoms {
        let distance = (position - center).norm();
        if distance <= cutoff {
            pocket_distances.push(distance);
            pocket_residue_ids.insert(*residue_number);
        }
    }

    if pocket_distances.is_empty() {
        return Err(AnalysisError::insufficient(
            "pocket_consistency",
            "no pocket residues detected",
        ));
    }

    let Some(mean_distance) = mean(&pocket_distances) else {
        unreachable!("pocket distances are non-empty");
    };
    let Some(distance_spread) = std_dev(&pocket_distances) else {
        unreachable!("pocket distances are non-empty");
    };
    let geometric_score = 1.0 / (1.0 + distance_spread);

    // Sorted lookup keeps the mean independent of set iteration order.
    let mut sorted_ids: Vec<isize> = pocket_residue_ids.iter().copied().collect();
    sorted_ids.sort_unstable();
    let confidence_values: Vec<f64> = sorted_ids
        .iter()
        .filter_map(|&id| confidence.diagonal_at(id))
        .collect();
    let Some(mean_pae) = mean(&confidence_values) else {
        return Err(AnalysisError::insufficient(
            "pocket_consistency",
            "no confidence entries cover the pocket residues",
        ));
    };
    let confidence_score = 1.0 / (1.0 + mean_pae);

    let pocket_score = geometric_score * confidence_score;
    debug!(
        residues = pocket_residue_ids.len(),
        mean_distance, "pocket measured"
    );

    Ok(PocketConsistency {
        pocket_residue_count: pocket_residue_ids.len(),
        mean_distance: round2(mean_distance),
        distance_std_dev: round2(distance_spread),
        mean_pocket_pae: round2(mean_pae),
        geometric_score: round3(geometric_score),
        confidence_score: round3(confidence_score),
        pocket_consistency_score: round3(pocket_score),
    })
}

/// Counts steric clashes between protein and ligand atoms: a pair clashes
/// when its distance falls below `scale` times the sum of the two
/// Van-der-Waals radii. Pairs with an untabulated element are skipped. The
/// clash score saturates linearly at twenty clashes.
///
/// # Errors
///
/// `InsufficientData` if the model holds no ligand atoms.
pub fn steric_clashes(model: &StructureModel, scale: f64) -> AnalysisResult<StericClashes> {
    let mut protein_atoms: Vec<(Point3<f64>, f64)> = Vec::new();
    let mut ligand_atoms: Vec<(Point3<f64>, f64)> = Vec::new();
    let mut ligand_present = false;

    for (_, chain) in model.chains_in_order() {
        for &residue_id in chain.residues() {
            let Some(residue) = model.residue(residue_id) else {
                continue;
            };
            match classify_residue(&residue.name) {
                ResidueClass::Protein => {
                    for atom in model.residue_atoms(residue_id) {
                        if let Some(radius) = vdw_radius(&atom.element) {
                            protein_atoms.push((atom.position, radius));
                        }
                    }
                }
                ResidueClass::Excluded => {}
                ResidueClass::Nucleic | ResidueClass::Other => {
                    for atom in model.residue_atoms(residue_id) {
                        ligand_present = true;
                        if let Some(radius) = vdw_radius(&atom.element) {
                            ligand_atoms.push((atom.position, radius));
                        }
                    }
                }
            }
        }
    }

    if !ligand_present {
        return Err(AnalysisError::insufficient(
            "steric_clashes",
            "no ligand atoms found",
        ));
    }

    let mut clash_count = 0usize;
    let mut worst_overlap = 0.0f64;
    for &(protein_position, protein_radius) in &protein_atoms {
        for &(ligand_position, ligand_radius) in &ligand_atoms {
            let distance = (protein_position - ligand_position).norm();
            let clash_cutoff = scale * (protein_radius + ligand_radius);
            if distance < clash_cutoff {
                clash_count += 1;
                worst_overlap = worst_overlap.max(clash_cutoff - distance);
            }
        }
    }

    let clash_score = (clash_count as f64 / CLASH_SCORE_SATURATION).min(1.0);
    debug!(clash_count, worst_overlap, "clash scan finished");

    Ok(StericClashes {
        clash_count,
        worst_overlap_angstrom: round3(worst_overlap),
        clash_score: round3(clash_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::ids::ResidueId;
    use crate::core::surface::VoronotaSurface;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    struct ModelBuilder {
        model: StructureModel,
        next_serial: usize,
    }

    impl ModelBuilder {
        fn new() -> Self {
            Self {
                model: StructureModel::new(),
                next_serial: 1,
            }
        }

        fn residue(&mut self, chain: &str, number: isize, name: &str) -> ResidueId {
            let chain_id = self.model.add_chain(chain);
            self.model.add_residue(chain_id, number, name).unwrap()
        }

        fn atom(&mut self, residue_id: ResidueId, name: &str, element: &str, pos: (f64, f64, f64)) {
            let serial = self.next_serial;
            self.next_serial += 1;
            let atom = Atom::new(
                serial,
                name,
                element,
                residue_id,
                Point3::new(pos.0, pos.1, pos.2),
            );
            self.model.add_atom_to_residue(residue_id, atom).unwrap();
        }

        /// Adds `count` carbon atoms spread along the x axis.
        fn carbon_cluster(&mut self, residue_id: ResidueId, count: usize, origin: (f64, f64, f64)) {
            for i in 0..count {
                let name = format!("C{i}");
                self.atom(
                    residue_id,
                    &name,
                    "C",
                    (origin.0 + i as f64 * 0.5, origin.1, origin.2),
                );
            }
        }
    }

    mod ligand_selection {
        use super::*;

        #[test]
        fn seven_atoms_never_qualify_eight_do() {
            let mut b = ModelBuilder::new();
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 0.0, 0.0));
            let lig = b.residue("A", 2, "LIG");
            b.carbon_cluster(lig, 7, (10.0, 0.0, 0.0));
            assert!(select_ligand_group(&b.model).is_none());

            let lig2 = b.residue("A", 3, "XYZ");
            b.carbon_cluster(lig2, 8, (20.0, 0.0, 0.0));
            let (name, indices) = select_ligand_group(&b.model).unwrap();
            assert_eq!(name, "XYZ");
            assert_eq!(indices.len(), 8);
        }

        #[test]
        fn largest_atom_group_wins() {
            let mut b = ModelBuilder::new();
            let small = b.residue("A", 1, "ZZZ");
            b.carbon_cluster(small, 8, (0.0, 0.0, 0.0));
            let large = b.residue("A", 2, "ATP");
            b.carbon_cluster(large, 12, (30.0, 0.0, 0.0));

            let (name, _) = select_ligand_group(&b.model).unwrap();
            assert_eq!(name, "ATP");
        }

        #[test]
        fn equal_sizes_pick_the_lexicographically_smallest_name() {
            let mut b = ModelBuilder::new();
            let second = b.residue("A", 1, "BBB");
            b.carbon_cluster(second, 8, (0.0, 0.0, 0.0));
            let first = b.residue("A", 2, "AAA");
            b.carbon_cluster(first, 8, (30.0, 0.0, 0.0));

            let (name, _) = select_ligand_group(&b.model).unwrap();
            assert_eq!(name, "AAA");
        }

        #[test]
        fn atoms_of_one_name_accumulate_across_residues() {
            // Grouping is by residue name over the whole model.
            let mut b = ModelBuilder::new();
            let part1 = b.residue("A", 1, "LIG");
            b.carbon_cluster(part1, 4, (0.0, 0.0, 0.0));
            let part2 = b.residue("A", 2, "LIG");
            b.carbon_cluster(part2, 4, (5.0, 0.0, 0.0));

            let (name, indices) = select_ligand_group(&b.model).unwrap();
            assert_eq!(name, "LIG");
            assert_eq!(indices.len(), 8);
        }

        #[test]
        fn solvent_ions_and_polymers_are_never_candidates() {
            let mut b = ModelBuilder::new();
            let hoh = b.residue("A", 1, "HOH");
            b.carbon_cluster(hoh, 9, (0.0, 0.0, 0.0));
            let da = b.residue("A", 2, "DA");
            b.carbon_cluster(da, 20, (10.0, 0.0, 0.0));
            let ala = b.residue("A", 3, "ALA");
            b.carbon_cluster(ala, 10, (20.0, 0.0, 0.0));
            assert!(select_ligand_group(&b.model).is_none());
        }
    }

    mod burial {
        use super::*;

        #[test]
        fn isolated_ligand_is_not_buried() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("A", 1, "LIG");
            b.carbon_cluster(lig, 8, (0.0, 0.0, 0.0));

            let result = ligand_burial(&b.model, &VoronotaSurface::default()).unwrap();
            assert_relative_eq!(result.ligand_burial_percent, 0.0);
            assert_relative_eq!(result.sasa_free_ligand, result.sasa_bound_ligand);
            assert!(result.sasa_free_ligand > 0.0);
        }

        #[test]
        fn surrounding_protein_buries_ligand_surface() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("A", 1, "LIG");
            b.carbon_cluster(lig, 8, (0.0, 0.0, 0.0));
            let ala = b.residue("B", 1, "ALA");
            // A shell of protein atoms around the cluster.
            for (i, offset) in [
                (0, (0.0, 3.0, 0.0)),
                (1, (0.0, -3.0, 0.0)),
                (2, (0.0, 0.0, 3.0)),
                (3, (0.0, 0.0, -3.0)),
                (4, (-3.0, 0.0, 0.0)),
                (5, (6.5, 0.0, 0.0)),
            ] {
                let name = format!("X{i}");
                b.atom(ala, &name, "C", offset);
            }

            let result = ligand_burial(&b.model, &VoronotaSurface::default()).unwrap();
            assert!(result.ligand_burial_percent > 0.0);
            assert!(result.sasa_bound_ligand < result.sasa_free_ligand);
        }

        #[test]
        fn burial_without_a_ligand_is_insufficient_data() {
            let mut b = ModelBuilder::new();
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 0.0, 0.0));

            let result = ligand_burial(&b.model, &VoronotaSurface::default());
            assert!(matches!(
                result,
                Err(AnalysisError::InsufficientData { .. })
            ));
        }

        #[test]
        fn burial_is_idempotent() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("A", 1, "LIG");
            b.carbon_cluster(lig, 8, (0.0, 0.0, 0.0));
            let ala = b.residue("B", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 3.0, 0.0));

            let surface = VoronotaSurface::default();
            let first = ligand_burial(&b.model, &surface).unwrap();
            let second = ligand_burial(&b.model, &surface).unwrap();
            assert_eq!(first, second);
        }
    }

    mod pocket {
        use super::*;

        fn confidence_3x3() -> ConfidenceMatrix {
            ConfidenceMatrix::from_array(arr2(&[
                [0.5, 9.0, 9.0],
                [9.0, 1.5, 9.0],
                [9.0, 9.0, 4.0],
            ]))
            .unwrap()
        }

        #[test]
        fn pocket_scores_compactness_times_confidence() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("L", 10, "LIG");
            b.atom(lig, "C1", "C", (0.0, 0.0, 0.0));
            let ala1 = b.residue("A", 1, "ALA");
            b.atom(ala1, "CA", "C", (2.0, 0.0, 0.0));
            let ala2 = b.residue("A", 2, "ALA");
            b.atom(ala2, "CA", "C", (0.0, 3.0, 0.0));
            let ala3 = b.residue("A", 3, "ALA");
            b.atom(ala3, "CA", "C", (50.0, 0.0, 0.0));

            let result =
                pocket_consistency(&b.model, &confidence_3x3(), DEFAULT_POCKET_CUTOFF).unwrap();

            // Distances 2 and 3: mean 2.5, spread 0.5, geometric 1/1.5.
            // Confidence diagonal for residues 1 and 2: 0.5 and 1.5, mean 1,
            // confidence factor 0.5.
            assert_eq!(result.pocket_residue_count, 2);
            assert_relative_eq!(result.mean_distance, 2.5);
            assert_relative_eq!(result.distance_std_dev, 0.5);
            assert_relative_eq!(result.mean_pocket_pae, 1.0);
            assert_relative_eq!(result.geometric_score, 0.667);
            assert_relative_eq!(result.confidence_score, 0.5);
            assert_relative_eq!(result.pocket_consistency_score, 0.333);
        }

        #[test]
        fn out_of_bounds_confidence_rows_are_skipped() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("L", 10, "LIG");
            b.atom(lig, "C1", "C", (0.0, 0.0, 0.0));
            let near = b.residue("A", 2, "ALA");
            b.atom(near, "CA", "C", (2.0, 0.0, 0.0));
            let far_id = b.residue("A", 9, "ALA");
            b.atom(far_id, "CA", "C", (0.0, 2.0, 0.0));

            // Residue 9 has no row in a 3x3 matrix; only residue 2 counts.
            let result = pocket_consistency(&b.model, &confidence_3x3(), 4.5).unwrap();
            assert_eq!(result.pocket_residue_count, 2);
            assert_relative_eq!(result.mean_pocket_pae, 1.5);
        }

        #[test]
        fn no_ligand_atoms_is_insufficient_data() {
            let mut b = ModelBuilder::new();
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 0.0, 0.0));
            let hoh = b.residue("W", 100, "HOH");
            b.atom(hoh, "O", "O", (1.0, 0.0, 0.0));

            let result = pocket_consistency(&b.model, &confidence_3x3(), 4.5);
            assert!(matches!(
                result,
                Err(AnalysisError::InsufficientData { .. })
            ));
        }

        #[test]
        fn empty_pocket_is_insufficient_data() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("L", 10, "LIG");
            b.atom(lig, "C1", "C", (0.0, 0.0, 0.0));
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (50.0, 0.0, 0.0));

            let result = pocket_consistency(&b.model, &confidence_3x3(), 4.5);
            assert!(matches!(
                result,
                Err(AnalysisError::InsufficientData { .. })
            ));
        }

        #[test]
        fn pocket_without_confidence_coverage_is_insufficient_data() {
            let mut b = ModelBuilder::new();
            let lig = b.residue("L", 10, "LIG");
            b.atom(lig, "C1", "C", (0.0, 0.0, 0.0));
            let ala = b.residue("A", 7, "ALA");
            b.atom(ala, "CA", "C", (2.0, 0.0, 0.0));

            let result = pocket_consistency(&b.model, &confidence_3x3(), 4.5);
            assert!(matches!(
                result,
                Err(AnalysisError::InsufficientData { .. })
            ));
        }

        #[test]
        fn nucleotides_count_as_the_bound_entity() {
            // A nucleic residue is "the ligand" for pocket purposes when no
            // small molecule exists.
            let mut b = ModelBuilder::new();
            let da = b.residue("N", 5, "DA");
            b.atom(da, "P", "P", (0.0, 0.0, 0.0));
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (2.0, 0.0, 0.0));

            let result = pocket_consistency(&b.model, &confidence_3x3(), 4.5).unwrap();
            assert_eq!(result.pocket_residue_count, 1);
        }
    }

    mod clashes {
        use super::*;

        /// Model with one protein carbon at the origin and `count` ligand
        /// carbons all at the given distance along x.
        fn clash_fixture(count: usize, distance: f64) -> StructureModel {
            let mut b = ModelBuilder::new();
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 0.0, 0.0));
            let lig = b.residue("L", 2, "LIG");
            for i in 0..count {
                let name = format!("C{i}");
                b.atom(lig, &name, "C", (distance, 0.0, 0.0));
            }
            b.model
        }

        #[test]
        fn twenty_clashes_saturate_the_score() {
            let result = steric_clashes(&clash_fixture(20, 1.0), DEFAULT_VDW_SCALE).unwrap();
            assert_eq!(result.clash_count, 20);
            assert_relative_eq!(result.clash_score, 1.0);
        }

        #[test]
        fn ten_clashes_score_one_half() {
            let result = steric_clashes(&clash_fixture(10, 1.0), DEFAULT_VDW_SCALE).unwrap();
            assert_eq!(result.clash_count, 10);
            assert_relative_eq!(result.clash_score, 0.5);
        }

        #[test]
        fn more_than_twenty_clashes_stay_at_one() {
            let result = steric_clashes(&clash_fixture(35, 1.0), DEFAULT_VDW_SCALE).unwrap();
            assert_eq!(result.clash_count, 35);
            assert_relative_eq!(result.clash_score, 1.0);
        }

        #[test]
        fn worst_overlap_is_cutoff_minus_distance() {
            // Carbon-carbon cutoff at scale 0.75 is 2.55; distance 1.0
            // leaves an overlap of 1.55.
            let result = steric_clashes(&clash_fixture(1, 1.0), DEFAULT_VDW_SCALE).unwrap();
            assert_eq!(result.clash_count, 1);
            assert_relative_eq!(result.worst_overlap_angstrom, 1.55);
        }

        #[test]
        fn contact_at_the_scaled_radius_sum_is_not_a_clash() {
            // With scale 0.5 the carbon-carbon cutoff is exactly 1.7; the
            // comparison is strict.
            let result = steric_clashes(&clash_fixture(1, 1.7), 0.5).unwrap();
            assert_eq!(result.clash_count, 0);
            assert_relative_eq!(result.worst_overlap_angstrom, 0.0);
            assert_relative_eq!(result.clash_score, 0.0);

            let result = steric_clashes(&clash_fixture(1, 1.6), 0.5).unwrap();
            assert_eq!(result.clash_count, 1);
        }

        #[test]
        fn untabulated_elements_are_skipped_but_still_count_as_ligand() {
            let mut b = ModelBuilder::new();
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 0.0, 0.0));
            let lig = b.residue("L", 2, "LIG");
            b.atom(lig, "FE1", "FE", (0.5, 0.0, 0.0));

            let result = steric_clashes(&b.model, DEFAULT_VDW_SCALE).unwrap();
            assert_eq!(result.clash_count, 0);
            assert_relative_eq!(result.clash_score, 0.0);
        }

        #[test]
        fn no_ligand_atoms_is_insufficient_data() {
            let mut b = ModelBuilder::new();
            let ala = b.residue("A", 1, "ALA");
            b.atom(ala, "CA", "C", (0.0, 0.0, 0.0));
            let hoh = b.residue("W", 2, "HOH");
            b.atom(hoh, "O", "O", (1.0, 0.0, 0.0));

            let result = steric_clashes(&b.model, DEFAULT_VDW_SCALE);
            assert!(matches!(
                result,
                Err(AnalysisError::InsufficientData { .. })
            ));
        }
    }
}
