/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Closed-form atom-count estimators.
//!
//! Two alternative methods share the same inputs and produce the same
//! four counts: [`area::by_area`] converts region areas through areal
//! densities, [`volume::by_volume`] converts region volumes through the
//! bulk density. Both consult the crystal-constants cache and the
//! spherical-cap geometry; both are pure functions safe to call from
//! parallel workers sharing one [`ConstantsCache`].

pub mod area;
pub mod density;
pub mod errors;
pub mod volume;

use std::fmt;
use std::str::FromStr;

use crate::crystal::{ConstantsCache, Facet};
use crate::geometry::cap::{validate_angle, validate_radius};
use crate::geometry::outer_surface_area;
use crate::utils::constants::SMALL_RADIUS_THRESHOLD;
use crate::utils::{Advisory, Outcome};

pub use area::{areas, by_area, RegionAreas};
pub use density::{areal_density, area_to_atoms, bulk_density, volume_to_atoms};
pub use errors::{EstimatorError, Result};
pub use volume::{by_volume, volumes, RegionVolumes};

/// Atom counts of the four regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomCounts {
    /// Atoms in the perimeter ring
    pub perimeter: u64,
    /// Interfacial atoms, excluding the perimeter
    pub interface: u64,
    /// Outer-surface atoms, excluding interface and perimeter
    pub surface: u64,
    /// All atoms of the nanoparticle
    pub total: u64,
}

/// Which closed-form method converts geometry to counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingMethod {
    /// Region areas × areal densities
    Area,
    /// Region volumes × bulk density
    Volume,
}

impl FromStr for CountingMethod {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, String> {
        match text.trim().to_lowercase().as_str() {
            "area" => Ok(CountingMethod::Area),
            "volume" => Ok(CountingMethod::Volume),
            other => Err(format!("unknown counting method {:?}", other)),
        }
    }
}

impl fmt::Display for CountingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingMethod::Area => write!(f, "area"),
            CountingMethod::Volume => write!(f, "volume"),
        }
    }
}

/// Area of the nanoparticle's outer surface in Å², resolving the
/// interplanar spacing at the interface facet.
///
/// The spacing entering the shaving correction is the interfacial one
/// regardless of which facet dominates the free surface.
pub fn surface_area(
    cache: &ConstantsCache,
    element: &str,
    footprint_radius: f64,
    theta: f64,
    interface_facet: Option<Facet>,
) -> Result<Outcome<f64>> {
    validate_angle(theta)?;
    validate_radius(footprint_radius)?;

    let mut outcome = Outcome::new(());
    if footprint_radius < SMALL_RADIUS_THRESHOLD {
        outcome.push(
            Advisory::SmallRadius {
                radius: footprint_radius,
                threshold: SMALL_RADIUS_THRESHOLD,
            }
            .emit(),
        );
    }

    let constants = outcome.absorb(cache.constants(element, interface_facet)?);
    let area = outer_surface_area(footprint_radius, theta, constants.interplanar_spacing)?;
    Ok(outcome.map(|_| area))
}

/// Run the selected method on one parameter set
pub fn count(
    cache: &ConstantsCache,
    method: CountingMethod,
    element: &str,
    footprint_radius: f64,
    theta: f64,
    interface_facet: Option<Facet>,
    surface_facet: Option<Facet>,
) -> Result<Outcome<AtomCounts>> {
    match method {
        CountingMethod::Area => by_area(
            cache,
            element,
            footprint_radius,
            theta,
            interface_facet,
            surface_facet,
        ),
        CountingMethod::Volume => by_volume(
            cache,
            element,
            footprint_radius,
            theta,
            interface_facet,
            surface_facet,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("volume".parse::<CountingMethod>().unwrap(), CountingMethod::Volume);
        assert_eq!("Area".parse::<CountingMethod>().unwrap(), CountingMethod::Area);
        assert!("perimeter".parse::<CountingMethod>().is_err());
    }

    #[test]
    fn test_surface_area_positive_for_obtuse_angle() {
        let cache = ConstantsCache::new();
        let area = surface_area(&cache, "Pd", 70.0, 122.0, None).unwrap().into_value();
        assert!(area > 0.0);
    }
}
