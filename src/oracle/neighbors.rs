/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Distance-based bonding graph over an atomic structure.
//!
//! Two atoms are bonded when their minimum-image distance does not
//! exceed the scaled sum of their covalent radii plus a skin tolerance.
//! The graph is rebuilt per classification stage: interface detection
//! over-captures with a scaling factor above 1, while surface/bulk
//! discrimination uses unscaled radii and a much thinner skin, so the
//! two graphs are not interchangeable.

use super::errors::{OracleError, Result};
use crate::atoms::AtomicStructure;

/// Per-atom bonding cutoffs: covalent radius × scaling, with the listed
/// species zeroed out (their atoms then only bond to atoms whose own
/// cutoff still reaches them, which effectively removes them from the
/// graph for thin skins).
pub fn natural_cutoffs(
    structure: &AtomicStructure,
    scaling: f64,
    zeroed_species: &[String],
) -> Result<Vec<f64>> {
    structure
        .atoms()
        .iter()
        .map(|atom| {
            if zeroed_species.iter().any(|s| s.as_str() == atom.symbol()) {
                return Ok(0.0);
            }
            atom.covalent_radius()
                .map(|radius| radius * scaling)
                .ok_or_else(|| OracleError::UnknownSpecies(atom.symbol().to_string()))
        })
        .collect()
}

/// Undirected bonding graph over atom indices
#[derive(Debug, Clone)]
pub struct NeighborGraph {
    neighbors: Vec<Vec<usize>>,
}

impl NeighborGraph {
    /// Build the graph from per-atom cutoffs and a skin tolerance.
    /// Bond criterion: d(i, j) ≤ cutoff_i + cutoff_j + skin.
    pub fn build(structure: &AtomicStructure, cutoffs: &[f64], skin: f64) -> Self {
        let n = structure.atom_count();
        let mut neighbors = vec![Vec::new(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let reach = cutoffs[i] + cutoffs[j] + skin;
                let distance = structure
                    .distance(i, j)
                    .expect("indices bounded by atom count");
                if distance <= reach {
                    neighbors[i].push(j);
                    neighbors[j].push(i);
                }
            }
        }

        Self { neighbors }
    }

    /// Bonded partners of an atom
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Coordination number (bonded-partner count) of an atom
    pub fn coordination(&self, index: usize) -> usize {
        self.neighbors[index].len()
    }

    /// Number of atoms the graph was built over
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the graph covers no atoms
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{Atom, AtomicStructure, Vector3D};

    fn dimer(spacing: f64) -> AtomicStructure {
        let mut structure = AtomicStructure::new();
        structure.add_atom(Atom::new("Ag", Vector3D::origin()).unwrap());
        structure.add_atom(Atom::new("Ag", Vector3D::new(spacing, 0.0, 0.0)).unwrap());
        structure
    }

    #[test]
    fn test_bond_within_cutoff() {
        // Ag covalent radius 1.45: reach = 2.9 + skin
        let structure = dimer(2.89);
        let cutoffs = natural_cutoffs(&structure, 1.0, &[]).unwrap();
        let graph = NeighborGraph::build(&structure, &cutoffs, 0.05);
        assert_eq!(graph.coordination(0), 1);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn test_no_bond_beyond_cutoff() {
        let structure = dimer(3.2);
        let cutoffs = natural_cutoffs(&structure, 1.0, &[]).unwrap();
        let graph = NeighborGraph::build(&structure, &cutoffs, 0.05);
        assert_eq!(graph.coordination(0), 0);
    }

    #[test]
    fn test_scaling_extends_reach() {
        let structure = dimer(3.2);
        let cutoffs = natural_cutoffs(&structure, 1.3, &[]).unwrap();
        let graph = NeighborGraph::build(&structure, &cutoffs, 0.3);
        assert_eq!(graph.coordination(0), 1);
    }

    #[test]
    fn test_zeroed_species() {
        let mut structure = dimer(2.89);
        structure.add_atom(Atom::new("O", Vector3D::new(0.0, 1.8, 0.0)).unwrap());
        let cutoffs =
            natural_cutoffs(&structure, 1.0, &["O".to_string()]).unwrap();
        let graph = NeighborGraph::build(&structure, &cutoffs, 0.05);
        // Ag-Ag bond survives, Ag-O does not (1.45 + 0 + 0.05 < 1.8)
        assert_eq!(graph.coordination(0), 1);
        assert_eq!(graph.coordination(2), 0);
    }

    #[test]
    fn test_unknown_species_rejected() {
        let mut structure = AtomicStructure::new();
        // Og is a valid symbol but has no tabulated covalent radius
        structure.add_atom(Atom::new("Og", Vector3D::origin()).unwrap());
        assert!(matches!(
            natural_cutoffs(&structure, 1.0, &[]),
            Err(OracleError::UnknownSpecies(_))
        ));
    }
}
