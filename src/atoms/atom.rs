/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Atom representation for atomistic structures

use std::fmt;

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;

/// An atom in a supported-nanoparticle structure
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Normalized element symbol
    symbol: String,
    /// Atomic number (Z)
    atomic_number: u32,
    /// Position in Å
    position: Vector3D,
    /// Whether the atom is held fixed by a constraint (support layers
    /// typically are)
    fixed: bool,
}

impl Atom {
    /// Create a new atom; the symbol is capitalized and must exist in
    /// the periodic dataset
    pub fn new(symbol: &str, position: Vector3D) -> Result<Self> {
        let normalized = database::capitalize(symbol);
        let atomic_number = database::atomic_number(&normalized)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;

        Ok(Self {
            symbol: normalized,
            atomic_number,
            position,
            fixed: false,
        })
    }

    /// Create a new fixed (constrained) atom
    pub fn fixed(symbol: &str, position: Vector3D) -> Result<Self> {
        let mut atom = Self::new(symbol, position)?;
        atom.fixed = true;
        Ok(atom)
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Get the atom's position
    pub fn position(&self) -> Vector3D {
        self.position
    }

    /// Set the atom's position
    pub fn set_position(&mut self, position: Vector3D) {
        self.position = position;
    }

    /// Whether the atom is constrained
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Covalent radius in Å, `None` beyond the tabulated range
    pub fn covalent_radius(&self) -> Option<f64> {
        database::covalent_radius(self.atomic_number)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={}) at {}", self.symbol, self.atomic_number, self.position)
    }
}
