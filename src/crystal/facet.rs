/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Crystallographic facet (Miller index) type

use std::fmt;
use std::str::FromStr;

use super::errors::{CrystalError, Result};

/// A crystallographic plane orientation (h, k, l). Never (0, 0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facet {
    pub h: i32,
    pub k: i32,
    pub l: i32,
}

impl Facet {
    /// Create a facet, rejecting the degenerate (0, 0, 0)
    pub fn new(h: i32, k: i32, l: i32) -> Result<Self> {
        let facet = Self { h, k, l };
        if h == 0 && k == 0 && l == 0 {
            return Err(CrystalError::InvalidFacet(facet));
        }
        Ok(facet)
    }

    /// The Miller indices as a tuple
    pub fn indices(&self) -> (i32, i32, i32) {
        (self.h, self.k, self.l)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.k, self.l)
    }
}

impl FromStr for Facet {
    type Err = CrystalError;

    /// Parse "(1, 1, 1)", "(1,1,1)", or "1,1,1"
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CrystalError::FacetParse(text.to_string()));
        }

        let mut indices = [0i32; 3];
        for (slot, part) in indices.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| CrystalError::FacetParse(text.to_string()))?;
        }

        Facet::new(indices[0], indices[1], indices[2])
    }
}
