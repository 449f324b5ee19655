/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Region discrimination of a supported nanoparticle by coordination
//! geometry.
//!
//! One classification pass runs over one static structure:
//!
//! 1. interface detection over an over-capturing bonding graph (scaled
//!    covalent radii), collecting every NP atom bonded to a support atom,
//! 2. perimeter extraction inside the interface set by local
//!    coordination against a median/max threshold,
//! 3. surface/bulk split of all NP atoms by raw coordination number
//!    against the lattice's bulk coordination,
//! 4. set composition into the five disjoint categories.
//!
//! The perimeter heuristic assumes a flat, homogeneously dense
//! interface; it is not validated at runtime.

use std::collections::HashSet;

use super::errors::{OracleError, Result};
use super::neighbors::{natural_cutoffs, NeighborGraph};
use crate::atoms::lattice::reference_state;
use crate::atoms::{database, AtomicStructure};
use crate::estimator::AtomCounts;
use crate::utils::{Advisory, Outcome};

/// Scaling factor for covalent radii when hunting interfacial bonds;
/// above 1 to fully capture under-bonded atoms at the contact
pub const INTERFACE_SCALING: f64 = 1.3;

/// Scaling factor for the surface/bulk coordination graph
pub const SURFACE_SCALING: f64 = 1.0;

/// Bulk coordination number of fcc and hcp lattices
pub const FCC_HCP_COORD_CUTOFF: u32 = 12;

/// Bulk coordination number of bcc lattices
pub const BCC_COORD_CUTOFF: u32 = 8;

/// Neighbor-list skin for interface detection, Å
pub const INTERFACE_SKIN: f64 = 0.3;

/// Neighbor-list skin for the surface/bulk graph, Å; kept thin because
/// the classified structures are ideal crystals, not MD snapshots
pub const SURFACE_SKIN: f64 = 0.05;

/// Tunable parameters of one classification pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Covalent-radius scaling for interface detection
    pub interface_scaling: f64,
    /// Covalent-radius scaling for the surface/bulk graph
    pub surface_scaling: f64,
    /// Explicit coordination cutoff, overriding the per-lattice value
    pub coord_cutoff: Option<u32>,
    /// Skin tolerance of the interface graph, Å
    pub interface_skin: f64,
    /// Skin tolerance of the surface/bulk graph, Å
    pub surface_skin: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            interface_scaling: INTERFACE_SCALING,
            surface_scaling: SURFACE_SCALING,
            coord_cutoff: None,
            interface_skin: INTERFACE_SKIN,
            surface_skin: SURFACE_SKIN,
        }
    }
}

/// Partition of a structure's atom indices into regions.
///
/// The four nanoparticle categories are pairwise disjoint and cover the
/// nanoparticle atoms exactly. When interface detection fails (no
/// NP-support bonds) every field is empty; callers must check
/// [`RegionLabeling::is_empty`] before trusting zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionLabeling {
    /// NP outer-surface atoms, excluding the interface set
    pub surface: Vec<usize>,
    /// NP bulk atoms
    pub bulk: Vec<usize>,
    /// NP interfacial atoms, excluding the perimeter
    pub interface: Vec<usize>,
    /// NP perimeter atoms
    pub perimeter: Vec<usize>,
    /// Support atoms bonded to the NP
    pub support_interface: Vec<usize>,
    /// All support atoms
    pub support: Vec<usize>,
}

impl RegionLabeling {
    /// The all-empty sentinel returned when no NP-support bonds exist
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the failed-classification sentinel
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
            && self.bulk.is_empty()
            && self.interface.is_empty()
            && self.perimeter.is_empty()
            && self.support_interface.is_empty()
            && self.support.is_empty()
    }

    /// Region sizes in the shape the estimators produce, for parity
    /// comparison (total = all NP atoms)
    pub fn counts(&self) -> AtomCounts {
        AtomCounts {
            perimeter: self.perimeter.len() as u64,
            interface: self.interface.len() as u64,
            surface: self.surface.len() as u64,
            total: (self.surface.len()
                + self.bulk.len()
                + self.interface.len()
                + self.perimeter.len()) as u64,
        }
    }
}

fn resolve_np_element(
    structure: &AtomicStructure,
    np_element: Option<&str>,
) -> Result<String> {
    let symbol = np_element
        .map(database::capitalize)
        .or_else(|| structure.np_element().map(str::to_string))
        .ok_or(OracleError::NoNanoparticleElement)?;
    if structure.indices_of(&symbol).is_empty() {
        return Err(OracleError::MissingSpecies(symbol));
    }
    Ok(symbol)
}

fn resolve_support_elements(
    structure: &AtomicStructure,
    np_element: &str,
    support_elements: Option<&[String]>,
) -> Result<Vec<String>> {
    match support_elements {
        Some(given) => {
            let mut resolved = Vec::new();
            for symbol in given {
                let normalized = database::capitalize(symbol);
                if structure.indices_of(&normalized).is_empty() {
                    return Err(OracleError::MissingSpecies(normalized));
                }
                resolved.push(normalized);
            }
            Ok(resolved)
        }
        // whatever the nanoparticle is not
        None => Ok(structure
            .species()
            .into_iter()
            .filter(|s| s.as_str() != np_element)
            .collect()),
    }
}

/// Indices of interfacial atoms: every NP atom bonded to a support atom
/// and every support atom bonded to an NP atom, under the over-capturing
/// interface graph.
///
/// Returns `None` when no cross-species bonds exist: either the cutoff
/// scaling is too small or the particle is genuinely detached. The NP
/// set still contains the perimeter; use [`get_perimeter`] to split it.
pub fn get_interface(
    structure: &AtomicStructure,
    np_element: &str,
    support_elements: &[String],
    scaling: f64,
    skin: f64,
) -> Result<Option<(Vec<usize>, Vec<usize>)>> {
    let cutoffs = natural_cutoffs(structure, scaling, &[])?;
    let graph = NeighborGraph::build(structure, &cutoffs, skin);

    let mut np_side = Vec::new();
    let mut support_side: HashSet<usize> = HashSet::new();
    for (index, atom) in structure.atoms().iter().enumerate() {
        if atom.symbol() != np_element {
            continue;
        }
        let bonded_supports: Vec<usize> = graph
            .neighbors(index)
            .iter()
            .copied()
            .filter(|&j| {
                support_elements
                    .iter()
                    .any(|s| s.as_str() == structure.atoms()[j].symbol())
            })
            .collect();
        if !bonded_supports.is_empty() {
            np_side.push(index);
            support_side.extend(bonded_supports);
        }
    }

    if np_side.is_empty() || support_side.is_empty() {
        return Ok(None);
    }

    let mut support_side: Vec<usize> = support_side.into_iter().collect();
    support_side.sort_unstable();
    Ok(Some((np_side, support_side)))
}

/// Indices of perimeter atoms within an interfacial NP set.
///
/// A fresh graph is built over just the interfacial atoms, so only
/// same-layer bonds count. Interior interfacial atoms are more fully
/// coordinated within the flat layer than contact-line atoms, so any
/// atom with coordination strictly below max(median, max) is perimeter.
pub fn get_perimeter(
    structure: &AtomicStructure,
    np_interface: &[usize],
    scaling: f64,
    skin: f64,
) -> Result<Vec<usize>> {
    if np_interface.is_empty() {
        return Ok(Vec::new());
    }

    let layer = structure.subset(np_interface)?;
    let cutoffs = natural_cutoffs(&layer, scaling, &[])?;
    let graph = NeighborGraph::build(&layer, &cutoffs, skin);

    let coordinations: Vec<usize> = (0..layer.atom_count())
        .map(|i| graph.coordination(i))
        .collect();
    let max = *coordinations.iter().max().expect("non-empty layer");
    let threshold = median(&coordinations).max(max as f64);

    Ok(coordinations
        .iter()
        .enumerate()
        .filter(|&(_, &cn)| (cn as f64) < threshold)
        .map(|(local, _)| np_interface[local])
        .collect())
}

fn median(values: &[usize]) -> f64 {
    let mut sorted: Vec<usize> = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Split all NP atoms into bulk and surface-plus-interface by raw
/// coordination number.
///
/// Support radii are zeroed so support contacts never count. An atom at
/// exactly the lattice's bulk coordination is bulk; every other NP atom
/// (under- or over-coordinated) goes to the surface-plus-interface
/// set. Unrecognized lattices fall back to the fcc/hcp cutoff with an
/// advisory.
pub fn surface_by_coordination(
    structure: &AtomicStructure,
    np_element: &str,
    support_elements: &[String],
    scaling: f64,
    skin: f64,
    coord_cutoff: Option<u32>,
) -> Result<Outcome<Vec<usize>>> {
    let mut outcome = Outcome::new(());

    let cutoffs = natural_cutoffs(structure, scaling, support_elements)?;
    let graph = NeighborGraph::build(structure, &cutoffs, skin);

    let cutoff = match coord_cutoff {
        Some(value) => value,
        None => {
            let tabulated = reference_state(np_element)
                .and_then(|state| state.symmetry.bulk_coordination());
            match tabulated {
                Some(value) => value,
                None => {
                    outcome.push(
                        Advisory::UnrecognizedLattice {
                            element: np_element.to_string(),
                            fallback: FCC_HCP_COORD_CUTOFF,
                        }
                        .emit(),
                    );
                    FCC_HCP_COORD_CUTOFF
                }
            }
        }
    };

    let surface_plus_interface: Vec<usize> = structure
        .atoms()
        .iter()
        .enumerate()
        .filter(|(_, atom)| atom.symbol() == np_element)
        .filter(|&(index, _)| graph.coordination(index) != cutoff as usize)
        .map(|(index, _)| index)
        .collect();

    Ok(outcome.map(|_| surface_plus_interface))
}

/// One full classification pass over a supported-nanoparticle structure.
///
/// `np_element` falls back to the structure's tag; support species
/// default to every other species present. On interface-detection
/// failure the all-empty sentinel is returned with a
/// [`Advisory::NoInterfaceBonds`], not an error.
pub fn discriminate(
    structure: &AtomicStructure,
    np_element: Option<&str>,
    support_elements: Option<&[String]>,
    config: &ClassifierConfig,
) -> Result<Outcome<RegionLabeling>> {
    let np_element = resolve_np_element(structure, np_element)?;
    let support_elements = resolve_support_elements(structure, &np_element, support_elements)?;

    let mut outcome = Outcome::new(());

    let interface_result = get_interface(
        structure,
        &np_element,
        &support_elements,
        config.interface_scaling,
        config.interface_skin,
    )?;
    let (interface_plus_perimeter, support_interface) = match interface_result {
        Some(pair) => pair,
        None => {
            outcome.push(Advisory::NoInterfaceBonds.emit());
            return Ok(outcome.map(|_| RegionLabeling::empty()));
        }
    };

    let perimeter = get_perimeter(
        structure,
        &interface_plus_perimeter,
        config.interface_scaling,
        config.interface_skin,
    )?;
    let perimeter_set: HashSet<usize> = perimeter.iter().copied().collect();
    let interface: Vec<usize> = interface_plus_perimeter
        .iter()
        .copied()
        .filter(|index| !perimeter_set.contains(index))
        .collect();

    let surface_plus_interface = outcome.absorb(surface_by_coordination(
        structure,
        &np_element,
        &support_elements,
        config.surface_scaling,
        config.surface_skin,
        config.coord_cutoff,
    )?);

    let nps = structure.indices_of(&np_element);
    let interface_plus_perimeter_set: HashSet<usize> =
        interface_plus_perimeter.iter().copied().collect();
    let surface_plus_interface_set: HashSet<usize> =
        surface_plus_interface.iter().copied().collect();

    let surface: Vec<usize> = surface_plus_interface
        .iter()
        .copied()
        .filter(|index| !interface_plus_perimeter_set.contains(index))
        .collect();
    let bulk: Vec<usize> = nps
        .iter()
        .copied()
        .filter(|index| !surface_plus_interface_set.contains(index))
        .collect();

    let support: Vec<usize> = structure
        .atoms()
        .iter()
        .enumerate()
        .filter(|(_, atom)| support_elements.iter().any(|s| s.as_str() == atom.symbol()))
        .map(|(index, _)| index)
        .collect();

    Ok(outcome.map(|_| RegionLabeling {
        surface,
        bulk,
        interface,
        perimeter,
        support_interface,
        support,
    }))
}
