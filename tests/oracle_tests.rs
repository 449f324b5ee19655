/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

use std::collections::HashSet;

use npcount_rs::atoms::{Atom, AtomicStructure, Cell, Vector3D};
use npcount_rs::oracle::{
    discriminate, discriminate_batch, get_interface, ClassifierConfig, OracleError,
    INTERFACE_SCALING, INTERFACE_SKIN,
};
use npcount_rs::utils::Advisory;

const AG_LATTICE: f64 = 4.09;
const ADSORPTION_HEIGHT: f64 = 2.2;

/// All fcc lattice points of an (nx, ny, nz)-cell block: half-integer
/// grid positions (i, j, k)·a/2 with i + j + k even.
fn fcc_block(symbol: &str, a: f64, nx: usize, ny: usize, nz: usize, z0: f64) -> Vec<Atom> {
    let mut atoms = Vec::new();
    for i in 0..=(2 * nx) {
        for j in 0..=(2 * ny) {
            for k in 0..=(2 * nz) {
                if (i + j + k) % 2 != 0 {
                    continue;
                }
                let position = Vector3D::new(
                    i as f64 * a / 2.0,
                    j as f64 * a / 2.0,
                    z0 + k as f64 * a / 2.0,
                );
                atoms.push(Atom::new(symbol, position).unwrap());
            }
        }
    }
    atoms
}

/// A square grid of fixed oxygen atoms at z = 0, centred under the
/// cluster footprint with a margin on all sides
fn oxide_layer(spacing: f64, count: usize, x0: f64) -> Vec<Atom> {
    let mut atoms = Vec::new();
    for m in 0..count {
        for n in 0..count {
            let position = Vector3D::new(x0 + m as f64 * spacing, x0 + n as f64 * spacing, 0.0);
            atoms.push(Atom::fixed("O", position).unwrap());
        }
    }
    atoms
}

/// A 123-atom fcc Ag block adsorbed 2.2 Å above an 81-atom oxygen grid
fn supported_cluster() -> AtomicStructure {
    let mut structure =
        AtomicStructure::with_cell(Cell::orthorhombic(100.0, 100.0, 100.0, [false, false, false]));
    for atom in oxide_layer(2.05, 9, -2.0) {
        structure.add_atom(atom);
    }
    for atom in fcc_block("Ag", AG_LATTICE, 3, 3, 2, ADSORPTION_HEIGHT) {
        structure.add_atom(atom);
    }
    structure.set_np_element("Ag");
    structure
}

/// The same cluster floated far above the support: no interface bonds
fn detached_cluster() -> AtomicStructure {
    let mut structure =
        AtomicStructure::with_cell(Cell::orthorhombic(100.0, 100.0, 100.0, [false, false, false]));
    for atom in oxide_layer(2.05, 9, -2.0) {
        structure.add_atom(atom);
    }
    for atom in fcc_block("Ag", AG_LATTICE, 3, 3, 2, ADSORPTION_HEIGHT + 10.0) {
        structure.add_atom(atom);
    }
    structure.set_np_element("Ag");
    structure
}

fn as_set(indices: &[usize]) -> HashSet<usize> {
    indices.iter().copied().collect()
}

#[test]
fn test_categories_partition_the_nanoparticle() {
    let structure = supported_cluster();
    let labeling = discriminate(&structure, None, None, &ClassifierConfig::default())
        .unwrap()
        .into_value();

    let surface = as_set(&labeling.surface);
    let bulk = as_set(&labeling.bulk);
    let interface = as_set(&labeling.interface);
    let perimeter = as_set(&labeling.perimeter);

    // pairwise disjoint
    assert!(surface.is_disjoint(&bulk));
    assert!(surface.is_disjoint(&interface));
    assert!(surface.is_disjoint(&perimeter));
    assert!(bulk.is_disjoint(&interface));
    assert!(bulk.is_disjoint(&perimeter));
    assert!(interface.is_disjoint(&perimeter));

    // union is exactly the nanoparticle atom set
    let mut union = HashSet::new();
    union.extend(&surface);
    union.extend(&bulk);
    union.extend(&interface);
    union.extend(&perimeter);
    assert_eq!(union, as_set(&structure.indices_of("Ag")));
}

#[test]
fn test_region_sizes_of_the_fcc_block() {
    // The bottom (001) layer of the 3x3x2-cell block is a 25-site
    // square lattice: 12 of its sites lie on the layer boundary (the
    // perimeter), 13 inside (the interface). 37 lattice points have
    // all 12 nearest neighbors present (the bulk); the remaining
    // 123 - 37 - 25 = 61 nanoparticle atoms are free surface.
    let structure = supported_cluster();
    let labeling = discriminate(&structure, None, None, &ClassifierConfig::default())
        .unwrap()
        .into_value();

    assert_eq!(labeling.perimeter.len(), 12);
    assert_eq!(labeling.interface.len(), 13);
    assert_eq!(labeling.bulk.len(), 37);
    assert_eq!(labeling.surface.len(), 61);
    assert_eq!(labeling.support.len(), 81);
    assert!(!labeling.support_interface.is_empty());
    assert!(as_set(&labeling.support_interface).is_subset(&as_set(&labeling.support)));

    let counts = labeling.counts();
    assert_eq!(counts.total, 123);
    assert_eq!(counts.perimeter, 12);
}

#[test]
fn test_get_interface_finds_only_the_bottom_layer() {
    let structure = supported_cluster();
    let support = vec!["O".to_string()];
    let (np_side, support_side) =
        get_interface(&structure, "Ag", &support, INTERFACE_SCALING, INTERFACE_SKIN)
            .unwrap()
            .expect("bonded cluster has an interface");

    assert_eq!(np_side.len(), 25);
    // every interfacial NP atom sits in the bottom layer
    for &index in &np_side {
        let z = structure.atom(index).unwrap().position().z;
        assert!((z - ADSORPTION_HEIGHT).abs() < 1e-9);
    }
    assert!(!support_side.is_empty());
}

#[test]
fn test_detached_particle_yields_sentinel() {
    let structure = detached_cluster();
    let support = vec!["O".to_string()];
    let interface =
        get_interface(&structure, "Ag", &support, INTERFACE_SCALING, INTERFACE_SKIN).unwrap();
    assert!(interface.is_none());

    let outcome = discriminate(&structure, None, None, &ClassifierConfig::default()).unwrap();
    assert!(outcome.value.is_empty());
    assert!(outcome
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::NoInterfaceBonds)));
}

#[test]
fn test_missing_species_is_an_error() {
    let structure = supported_cluster();
    let result = discriminate(&structure, Some("Pt"), None, &ClassifierConfig::default());
    assert!(matches!(result, Err(OracleError::MissingSpecies(_))));

    let support = vec!["C".to_string()];
    let result = discriminate(&structure, None, Some(&support), &ClassifierConfig::default());
    assert!(matches!(result, Err(OracleError::MissingSpecies(_))));
}

#[test]
fn test_untagged_structure_needs_explicit_element() {
    let tagged = supported_cluster();
    let mut structure = AtomicStructure::with_cell(tagged.cell().clone());
    for atom in tagged.atoms() {
        structure.add_atom(atom.clone());
    }
    let result = discriminate(&structure, None, None, &ClassifierConfig::default());
    assert!(matches!(result, Err(OracleError::NoNanoparticleElement)));

    // passing the element explicitly recovers
    let labeling = discriminate(&structure, Some("Ag"), None, &ClassifierConfig::default())
        .unwrap()
        .into_value();
    assert!(!labeling.is_empty());
}

#[test]
fn test_unrecognized_lattice_falls_back_with_advisory() {
    // polonium is simple cubic: no tabulated bulk coordination
    let mut structure =
        AtomicStructure::with_cell(Cell::orthorhombic(50.0, 50.0, 50.0, [false, false, false]));
    structure.add_atom(Atom::fixed("O", Vector3D::new(0.0, 0.0, 0.0)).unwrap());
    structure.add_atom(Atom::fixed("O", Vector3D::new(3.35, 0.0, 0.0)).unwrap());
    structure.add_atom(Atom::new("Po", Vector3D::new(0.0, 0.0, 2.2)).unwrap());
    structure.add_atom(Atom::new("Po", Vector3D::new(3.35, 0.0, 2.2)).unwrap());
    structure.set_np_element("Po");

    let outcome = discriminate(&structure, None, None, &ClassifierConfig::default()).unwrap();
    assert!(outcome
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::UnrecognizedLattice { .. })));
    // both Po atoms bond the support: all interface, nothing else
    assert_eq!(outcome.value.interface.len() + outcome.value.perimeter.len(), 2);
    assert!(outcome.value.bulk.is_empty());

    // an explicit cutoff override silences the fallback advisory
    let config = ClassifierConfig {
        coord_cutoff: Some(1),
        ..ClassifierConfig::default()
    };
    let outcome = discriminate(&structure, None, None, &config).unwrap();
    assert!(outcome.advisories.is_empty());
}

#[test]
fn test_batch_preserves_order_and_isolates_failures() {
    let good = supported_cluster();
    let detached = detached_cluster();
    let mut untagged = AtomicStructure::with_cell(good.cell().clone());
    for atom in good.atoms() {
        untagged.add_atom(atom.clone());
    }

    let batch = vec![good, detached, untagged];
    let results = discriminate_batch(&batch, &ClassifierConfig::default(), Some(2)).unwrap();
    assert_eq!(results.len(), 3);

    // position 0: fully classified
    let first = results[0].as_ref().unwrap();
    assert_eq!(first.value.counts().total, 123);

    // position 1: detached, sentinel but not an error
    let second = results[1].as_ref().unwrap();
    assert!(second.value.is_empty());

    // position 2: untagged, a per-item error that aborts nothing
    assert!(matches!(
        results[2],
        Err(OracleError::NoNanoparticleElement)
    ));
}

#[test]
fn test_batch_on_global_pool_matches_scoped_pool() {
    let batch = vec![supported_cluster(), supported_cluster()];
    let config = ClassifierConfig::default();
    let scoped = discriminate_batch(&batch, &config, Some(1)).unwrap();
    let global = discriminate_batch(&batch, &config, None).unwrap();
    for (a, b) in scoped.iter().zip(&global) {
        assert_eq!(a.as_ref().unwrap().value, b.as_ref().unwrap().value);
    }
}
