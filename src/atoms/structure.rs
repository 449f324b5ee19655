/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Atomic structure representation for the atomistic oracle.
//!
//! A structure is a supported nanoparticle as produced by an external
//! structure builder: a list of atoms, a periodic cell, and a tag naming
//! the nanoparticle species (everything else is support).

use super::atom::Atom;
use super::cell::Cell;
use super::database;
use super::errors::{AtomError, Result};

/// A collection of atoms in a periodic cell
#[derive(Debug, Default, Clone)]
pub struct AtomicStructure {
    /// Atoms of the structure, nanoparticle and support alike
    atoms: Vec<Atom>,
    /// Periodic cell
    cell: Cell,
    /// Element the nanoparticle is made of, if tagged
    np_element: Option<String>,
}

impl AtomicStructure {
    /// Create a new empty structure with a non-periodic cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty structure with the given cell
    pub fn with_cell(cell: Cell) -> Self {
        Self {
            atoms: Vec::new(),
            cell,
            np_element: None,
        }
    }

    /// Add an atom, returning its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Get a reference to an atom by index
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Get a slice of all atoms
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Get the number of atoms
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Get the periodic cell
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Set the periodic cell
    pub fn set_cell(&mut self, cell: Cell) {
        self.cell = cell;
    }

    /// Tag which element the nanoparticle is made of
    pub fn set_np_element(&mut self, symbol: &str) {
        self.np_element = Some(database::capitalize(symbol));
    }

    /// The tagged nanoparticle element, if any
    pub fn np_element(&self) -> Option<&str> {
        self.np_element.as_deref()
    }

    /// Distinct element symbols present, in order of first appearance
    pub fn species(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for atom in &self.atoms {
            if !seen.iter().any(|s| s.as_str() == atom.symbol()) {
                seen.push(atom.symbol().to_string());
            }
        }
        seen
    }

    /// Indices of all atoms of the given species
    pub fn indices_of(&self, symbol: &str) -> Vec<usize> {
        let normalized = database::capitalize(symbol);
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, atom)| atom.symbol() == normalized)
            .map(|(index, _)| index)
            .collect()
    }

    /// Minimum-image distance between two atoms
    pub fn distance(&self, i: usize, j: usize) -> Option<f64> {
        let a = self.atoms.get(i)?;
        let b = self.atoms.get(j)?;
        Some(
            self.cell
                .minimum_image_distance(a.position() - b.position()),
        )
    }

    /// Extract the sub-structure holding the given atoms (same cell).
    /// Fails if any index is out of range.
    pub fn subset(&self, indices: &[usize]) -> Result<AtomicStructure> {
        let mut sub = AtomicStructure::with_cell(self.cell.clone());
        sub.np_element = self.np_element.clone();
        for &index in indices {
            let atom = self
                .atoms
                .get(index)
                .ok_or(AtomError::IndexOutOfRange(index))?;
            sub.add_atom(atom.clone());
        }
        Ok(sub)
    }
}
