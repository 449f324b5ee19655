/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Atomic density conversions between geometric measures and counts.
//!
//! Areal densities are facet-specific (atoms per Å² of a given plane);
//! bulk density is facet-independent (atoms per Å³). Rounding to a count
//! clamps to zero when the measure is not finite, which is how the
//! degenerate "no interior" geometry propagates out as 0 atoms rather
//! than an error.

use super::errors::Result;
use crate::crystal::{ConstantsCache, Facet};
use crate::utils::{Outcome, AVOGADRO};

/// Atoms per Å² of the given facet: z·N_A/V_m
pub fn areal_density(
    cache: &ConstantsCache,
    element: &str,
    facet: Option<Facet>,
) -> Result<Outcome<f64>> {
    let outcome = cache.constants(element, facet)?;
    Ok(outcome.map(|c| c.interplanar_spacing * AVOGADRO / c.molar_volume))
}

/// Atoms per Å³ of the bulk: N_A/V_m. Facet-independent, but the lookup
/// itself resolves a default facet, so the outcome may carry that
/// advisory.
pub fn bulk_density(cache: &ConstantsCache, element: &str) -> Result<Outcome<f64>> {
    let outcome = cache.constants(element, None)?;
    Ok(outcome.map(|c| AVOGADRO / c.molar_volume))
}

/// Convert an area (Å²) to an atom count, rounded to the nearest
/// integer and clamped to ≥ 0
pub fn area_to_atoms(
    cache: &ConstantsCache,
    area: f64,
    element: &str,
    facet: Option<Facet>,
) -> Result<Outcome<u64>> {
    let density = areal_density(cache, element, facet)?;
    Ok(density.map(|rho| round_count(area * rho)))
}

/// Convert a volume (Å³) to an atom count, rounded to the nearest
/// integer. A non-finite volume (the clamped "no interior" case) gives
/// 0. Passing `molar_volume` skips the per-element lookup.
pub fn volume_to_atoms(
    cache: &ConstantsCache,
    volume: f64,
    element: &str,
    molar_volume: Option<f64>,
) -> Result<Outcome<u64>> {
    match molar_volume {
        Some(vm) => Ok(Outcome::new(round_count(volume * AVOGADRO / vm))),
        None => {
            let density = bulk_density(cache, element)?;
            Ok(density.map(|rho| round_count(volume * rho)))
        }
    }
}

fn round_count(value: f64) -> u64 {
    let rounded = value.round();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ag_111_areal_density() {
        let cache = ConstantsCache::new();
        let density = areal_density(&cache, "Ag", Some(Facet { h: 1, k: 1, l: 1 }))
            .unwrap()
            .into_value();
        assert_abs_diff_eq!(density, 0.1380551931635095, epsilon = 1e-4);
    }

    #[test]
    fn test_au_area_to_atoms() {
        let cache = ConstantsCache::new();
        let atoms = area_to_atoms(&cache, 200.0, "Au", Some(Facet { h: 1, k: 1, l: 1 }))
            .unwrap()
            .into_value();
        assert_abs_diff_eq!(atoms as f64, 27.0, epsilon = 1.0);
    }

    #[test]
    fn test_cr_volume_to_atoms() {
        let cache = ConstantsCache::new();
        let atoms = volume_to_atoms(&cache, 1000.0, "Cr", None).unwrap().into_value();
        assert_abs_diff_eq!(atoms as f64, 83.0, epsilon = 1.0);
    }

    #[test]
    fn test_round_count_clamps() {
        assert_eq!(round_count(f64::NAN), 0);
        assert_eq!(round_count(f64::INFINITY), 0);
        assert_eq!(round_count(-3.2), 0);
        assert_eq!(round_count(2.5), 3);
        assert_eq!(round_count(0.4), 0);
    }

    #[test]
    fn test_explicit_molar_volume_skips_lookup() {
        let cache = ConstantsCache::new();
        // an element without reference data still converts when the
        // molar volume is supplied directly
        let outcome = volume_to_atoms(&cache, 1000.0, "Si", Some(1.2e25)).unwrap();
        assert!(outcome.advisories.is_empty());
        assert_eq!(outcome.value, (1000.0 * AVOGADRO / 1.2e25).round() as u64);
    }
}
