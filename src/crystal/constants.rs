/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Crystal constants lookup with memoization.
//!
//! `constants()` bundles the three quantities both counting methods
//! need: the molar volume at equilibrium, the interplanar spacing of the
//! requested facet, and the covalent (atomic) diameter. The result is a
//! pure function of (element, facet) over an immutable dataset, so it is
//! memoized. The cache is an explicit object: estimator entry points
//! accept a `&ConstantsCache`, and a process-wide instance is available
//! through [`ConstantsCache::global`] for callers that do not care.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use super::errors::{CrystalError, Result};
use super::facet::Facet;
use super::spacing::interplanar_spacing;
use crate::atoms::database;
use crate::atoms::lattice::reference_state;
use crate::utils::{Advisory, Outcome};

/// Derived constants for an (element, facet) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalConstants {
    /// Molar volume at equilibrium, Å³/mole
    pub molar_volume: f64,
    /// Interplanar spacing of the resolved facet, Å
    pub interplanar_spacing: f64,
    /// Covalent diameter (2 × covalent radius), Å
    pub atomic_diameter: f64,
    /// The facet the spacing refers to; the per-lattice default when the
    /// caller supplied none
    pub facet: Facet,
}

/// Memoizing store for [`CrystalConstants`], keyed by the element and
/// the facet as requested (an omitted facet is its own key, so the
/// default-facet resolution is cached too).
///
/// Reads take a shared lock; a miss recomputes outside the lock and
/// inserts afterwards. Two threads racing on the same missing key will
/// compute it twice, which is harmless: the function is pure and both
/// results are identical.
#[derive(Debug, Default)]
pub struct ConstantsCache {
    entries: RwLock<HashMap<(String, Option<Facet>), CrystalConstants>>,
}

static GLOBAL_CACHE: Lazy<ConstantsCache> = Lazy::new(ConstantsCache::default);

impl ConstantsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared process-wide cache
    pub fn global() -> &'static ConstantsCache {
        &GLOBAL_CACHE
    }

    /// Number of memoized (element, facet) pairs
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up (molar volume, interplanar spacing, atomic diameter) for
    /// an element and an optional facet.
    ///
    /// The element symbol is capitalized before matching. An omitted
    /// facet resolves to the per-lattice default and attaches an
    /// [`Advisory::AssumedDefaultFacet`] to the outcome (on cache hits
    /// too, so repeated calls see consistent advisories).
    pub fn constants(
        &self,
        element: &str,
        facet: Option<Facet>,
    ) -> Result<Outcome<CrystalConstants>> {
        let element = database::capitalize(element);

        if let Some(requested) = facet {
            // surfaces the (0,0,0) error even for facets built by hand
            Facet::new(requested.h, requested.k, requested.l)?;
        }

        let key = (element.clone(), facet);
        let cached = {
            let entries = self
                .entries
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            entries.get(&key).copied()
        };

        let constants = match cached {
            Some(constants) => constants,
            None => {
                let constants = compute_constants(&element, facet)?;
                let mut entries = self
                    .entries
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                entries.insert(key, constants);
                constants
            }
        };

        let mut outcome = Outcome::new(constants);
        if facet.is_none() {
            outcome.push(
                Advisory::AssumedDefaultFacet {
                    element,
                    facet: constants.facet,
                }
                .emit(),
            );
        }
        Ok(outcome)
    }
}

fn compute_constants(element: &str, facet: Option<Facet>) -> Result<CrystalConstants> {
    let atomic_number = database::atomic_number(element)
        .ok_or_else(|| CrystalError::UnknownElement(element.to_string()))?;
    let covalent_radius = database::covalent_radius(atomic_number)
        .ok_or_else(|| CrystalError::UnknownElement(element.to_string()))?;
    let state = reference_state(element)
        .ok_or_else(|| CrystalError::UnknownElement(element.to_string()))?;
    let molar_volume = state
        .molar_volume()
        .ok_or_else(|| CrystalError::UnknownElement(element.to_string()))?;

    let resolved = facet.unwrap_or_else(|| state.symmetry.default_facet());
    let spacing = interplanar_spacing(element, resolved).ok_or_else(|| {
        CrystalError::UnsupportedFacet {
            element: element.to_string(),
            facet: resolved,
        }
    })?;

    Ok(CrystalConstants {
        molar_volume,
        interplanar_spacing: spacing,
        atomic_diameter: 2.0 * covalent_radius,
        facet: resolved,
    })
}

/// Convenience entry point using the shared process-wide cache
pub fn constants(element: &str, facet: Option<Facet>) -> Result<Outcome<CrystalConstants>> {
    ConstantsCache::global().constants(element, facet)
}
