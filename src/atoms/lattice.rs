/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Reference crystal states: equilibrium lattice symmetry and lattice
//! constants per element, with derived molar volumes.
//!
//! Lattice constants are the equilibrium values of each element's
//! reference (standard-state) structure. Molar volume follows from the
//! conventional-cell volume and its occupancy, so the derived densities
//! stay consistent with the tabulated interplanar spacings.

use crate::crystal::Facet;
use crate::utils::AVOGADRO;

/// Crystal lattice symmetry classes of the reference states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatticeSymmetry {
    Fcc,
    Bcc,
    Sc,
    Hcp,
    Bct,
    Orthorhombic,
    Rhombohedral,
}

impl LatticeSymmetry {
    /// The lowest-energy facet assumed when the caller supplies none
    pub fn default_facet(&self) -> Facet {
        match self {
            LatticeSymmetry::Fcc => Facet { h: 1, k: 1, l: 1 },
            LatticeSymmetry::Bcc => Facet { h: 1, k: 1, l: 0 },
            LatticeSymmetry::Sc => Facet { h: 1, k: 0, l: 0 },
            LatticeSymmetry::Hcp => Facet { h: 0, k: 0, l: 1 },
            LatticeSymmetry::Bct => Facet { h: 1, k: 1, l: 1 },
            LatticeSymmetry::Orthorhombic => Facet { h: 1, k: 1, l: 1 },
            LatticeSymmetry::Rhombohedral => Facet { h: 1, k: 1, l: 1 },
        }
    }

    /// Bulk coordination number of a close-packed atom in this lattice,
    /// where one is tabulated (fcc/hcp: 12, bcc: 8)
    pub fn bulk_coordination(&self) -> Option<u32> {
        match self {
            LatticeSymmetry::Fcc | LatticeSymmetry::Hcp => Some(12),
            LatticeSymmetry::Bcc => Some(8),
            _ => None,
        }
    }

    /// Atoms per conventional cell
    fn atoms_per_cell(&self) -> Option<f64> {
        match self {
            LatticeSymmetry::Fcc => Some(4.0),
            LatticeSymmetry::Bcc => Some(2.0),
            LatticeSymmetry::Sc => Some(1.0),
            LatticeSymmetry::Hcp => Some(2.0),
            LatticeSymmetry::Bct => Some(2.0),
            _ => None,
        }
    }
}

/// Equilibrium reference structure of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceState {
    /// Lattice symmetry class
    pub symmetry: LatticeSymmetry,
    /// Lattice constant a in Å
    pub a: f64,
    /// Lattice constant c in Å, for tetragonal/hexagonal symmetries
    pub c: Option<f64>,
}

impl ReferenceState {
    /// Conventional-cell volume in Å³
    fn cell_volume(&self) -> Option<f64> {
        match self.symmetry {
            LatticeSymmetry::Fcc | LatticeSymmetry::Bcc | LatticeSymmetry::Sc => {
                Some(self.a.powi(3))
            }
            // hexagonal cell: a^2 c sin(60 deg)
            LatticeSymmetry::Hcp => self.c.map(|c| self.a * self.a * c * 3f64.sqrt() / 2.0),
            LatticeSymmetry::Bct => self.c.map(|c| self.a * self.a * c),
            _ => None,
        }
    }

    /// Molar volume at equilibrium in Å³/mole, derived from the cell
    /// volume and occupancy; `None` for symmetries without a tabulated
    /// cell formula
    pub fn molar_volume(&self) -> Option<f64> {
        let cell = self.cell_volume()?;
        let atoms = self.symmetry.atoms_per_cell()?;
        Some(cell / atoms * AVOGADRO)
    }
}

/// Reference state for an element symbol (already capitalized), `None`
/// for elements without a tabulated reference structure
pub fn reference_state(symbol: &str) -> Option<ReferenceState> {
    use LatticeSymmetry::*;

    let (symmetry, a, c) = match symbol {
        // fcc metals
        "Al" => (Fcc, 4.05, None),
        "Ca" => (Fcc, 5.58, None),
        "Ni" => (Fcc, 3.52, None),
        "Cu" => (Fcc, 3.61, None),
        "Sr" => (Fcc, 6.08, None),
        "Rh" => (Fcc, 3.80, None),
        "Pd" => (Fcc, 3.89, None),
        "Ag" => (Fcc, 4.09, None),
        "Ir" => (Fcc, 3.84, None),
        "Pt" => (Fcc, 3.92, None),
        "Au" => (Fcc, 4.08, None),
        "Pb" => (Fcc, 4.95, None),
        // bcc metals
        "Li" => (Bcc, 3.49, None),
        "Na" => (Bcc, 4.23, None),
        "K" => (Bcc, 5.23, None),
        "V" => (Bcc, 3.03, None),
        "Cr" => (Bcc, 2.88, None),
        "Fe" => (Bcc, 2.87, None),
        "Nb" => (Bcc, 3.30, None),
        "Mo" => (Bcc, 3.15, None),
        "Ba" => (Bcc, 5.02, None),
        "Ta" => (Bcc, 3.31, None),
        "W" => (Bcc, 3.16, None),
        // hcp metals
        "Be" => (Hcp, 2.29, Some(3.58)),
        "Mg" => (Hcp, 3.21, Some(5.21)),
        "Sc" => (Hcp, 3.31, Some(5.27)),
        "Ti" => (Hcp, 2.95, Some(4.68)),
        "Co" => (Hcp, 2.51, Some(4.07)),
        "Zn" => (Hcp, 2.66, Some(4.95)),
        "Y" => (Hcp, 3.65, Some(5.73)),
        "Zr" => (Hcp, 3.23, Some(5.15)),
        "Tc" => (Hcp, 2.74, Some(4.40)),
        "Ru" => (Hcp, 2.70, Some(4.28)),
        "Cd" => (Hcp, 2.98, Some(5.62)),
        "Hf" => (Hcp, 3.20, Some(5.06)),
        "Re" => (Hcp, 2.76, Some(4.46)),
        "Os" => (Hcp, 2.74, Some(4.32)),
        // simple cubic
        "Po" => (Sc, 3.35, None),
        // body-centred tetragonal
        "In" => (Bct, 3.25, Some(4.95)),
        _ => return None,
    };

    Some(ReferenceState { symmetry, a, c })
}
