/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Area-based counting method.
//!
//! The interface is taken as the footprint disc shrunk by one atomic
//! diameter, so the perimeter is a flat annular ring of width d
//! regardless of the contact angle. That deliberate simplification makes
//! the interfacial count independent of θ and is a known source of error
//! for angles far from 90°.

use super::density::{area_to_atoms, volume_to_atoms};
use super::errors::Result;
use super::{surface_area, AtomCounts};
use crate::crystal::{ConstantsCache, Facet};
use crate::geometry::cap::{validate_angle, validate_radius};
use crate::geometry::total_cap_volume;
use crate::utils::constants::TOTAL_VOLUME_RADIUS_THRESHOLD;
use crate::utils::Outcome;

/// Areas of the three regions, in Å²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionAreas {
    /// Interface area, excluding the perimeter ring
    pub interface: f64,
    /// Perimeter ring area
    pub perimeter: f64,
    /// Outer (vacuum-facing) surface area, excluding the interface
    pub surface: f64,
}

/// Compute interface, perimeter, and surface areas.
///
/// By construction `interface + perimeter` equals the footprint area
/// π·r² exactly. The surface area uses the interplanar spacing at the
/// *interface* facet for the shaving correction, whatever the surface
/// facet is.
pub fn areas(
    cache: &ConstantsCache,
    element: &str,
    footprint_radius: f64,
    theta: f64,
    interface_facet: Option<Facet>,
) -> Result<Outcome<RegionAreas>> {
    validate_angle(theta)?;
    validate_radius(footprint_radius)?;

    let mut outcome = Outcome::new(());
    let constants = outcome.absorb(cache.constants(element, interface_facet)?);
    let d = constants.atomic_diameter;

    let r = footprint_radius;
    let footprint = std::f64::consts::PI * r * r;
    let interface = std::f64::consts::PI * (r - d) * (r - d);
    let perimeter = footprint - interface;
    let surface = outcome.absorb(surface_area(
        cache,
        element,
        footprint_radius,
        theta,
        interface_facet,
    )?);

    let mut result = outcome.map(|_| RegionAreas {
        interface,
        perimeter,
        surface,
    });
    result.dedup_advisories();
    Ok(result)
}

/// Full area-based atom counts.
///
/// The three regional counts convert areas through facet-specific areal
/// densities (interface facet for interface/perimeter, surface facet for
/// surface); the total count instead converts the full cap volume
/// through the bulk density. That asymmetry is intentional.
pub fn by_area(
    cache: &ConstantsCache,
    element: &str,
    footprint_radius: f64,
    theta: f64,
    interface_facet: Option<Facet>,
    surface_facet: Option<Facet>,
) -> Result<Outcome<AtomCounts>> {
    let mut outcome = Outcome::new(());

    let region_areas = outcome.absorb(areas(
        cache,
        element,
        footprint_radius,
        theta,
        interface_facet,
    )?);

    let perimeter =
        outcome.absorb(area_to_atoms(cache, region_areas.perimeter, element, interface_facet)?);
    let interface =
        outcome.absorb(area_to_atoms(cache, region_areas.interface, element, interface_facet)?);
    let surface =
        outcome.absorb(area_to_atoms(cache, region_areas.surface, element, surface_facet)?);

    let total_volume = outcome.absorb(total_cap_volume(
        footprint_radius,
        theta,
        TOTAL_VOLUME_RADIUS_THRESHOLD,
    )?);
    let total = outcome.absorb(volume_to_atoms(cache, total_volume, element, None)?);

    let mut result = outcome.map(|_| AtomCounts {
        perimeter,
        interface,
        surface,
        total,
    });
    result.dedup_advisories();
    Ok(result)
}
