/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! JSON structure documents for the atomistic oracle.
//!
//! A document is a list of structures; each structure carries its cell,
//! per-axis periodicity, the nanoparticle species tag, and a flat atom
//! list:
//!
//! ```json
//! [{
//!   "np_element": "Ag",
//!   "cell": [[30.0, 0.0, 0.0], [0.0, 30.0, 0.0], [0.0, 0.0, 30.0]],
//!   "pbc": [true, true, false],
//!   "atoms": [{"symbol": "Ag", "position": [0.0, 0.0, 2.2], "fixed": false}]
//! }]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::Result;
use crate::atoms::{Atom, AtomicStructure, Cell, Vector3D};

#[derive(Debug, Serialize, Deserialize)]
struct RawAtom {
    symbol: String,
    position: [f64; 3],
    #[serde(default)]
    fixed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawStructure {
    #[serde(default)]
    np_element: Option<String>,
    cell: [[f64; 3]; 3],
    pbc: [bool; 3],
    atoms: Vec<RawAtom>,
}

fn build_structure(raw: RawStructure) -> Result<AtomicStructure> {
    let mut structure = AtomicStructure::with_cell(Cell::new(raw.cell, raw.pbc));
    if let Some(symbol) = &raw.np_element {
        structure.set_np_element(symbol);
    }
    for raw_atom in raw.atoms {
        let position = Vector3D::new(raw_atom.position[0], raw_atom.position[1], raw_atom.position[2]);
        let atom = if raw_atom.fixed {
            Atom::fixed(&raw_atom.symbol, position)?
        } else {
            Atom::new(&raw_atom.symbol, position)?
        };
        structure.add_atom(atom);
    }
    Ok(structure)
}

/// Load a list of structures from a JSON document
pub fn load_structures<P: AsRef<Path>>(path: P) -> Result<Vec<AtomicStructure>> {
    let file = File::open(path)?;
    let raw: Vec<RawStructure> = serde_json::from_reader(BufReader::new(file))?;
    raw.into_iter().map(build_structure).collect()
}

/// Parse a list of structures from JSON text
pub fn structures_from_json(text: &str) -> Result<Vec<AtomicStructure>> {
    let raw: Vec<RawStructure> = serde_json::from_str(text)?;
    raw.into_iter().map(build_structure).collect()
}
