/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Volume-based counting method.
//!
//! The interfacial layer is treated as a spherical segment of height z
//! (one interplanar spacing) at the bottom of the cap. Peeling a ring of
//! one atomic diameter off the footprint gives the non-perimeter
//! interior segment; the difference is the perimeter. Geometry of the
//! segment radii:
//!
//! - R: radius of the sphere the cap is cut from, R = r/sin θ
//! - r: footprint radius (bottom of the segment)
//! - x: radius of the top of the segment
//! - r2, x2: the same two radii after peeling the perimeter ring
//! - h: vertical distance from the sphere centre to the top of the
//!   segment (θ > 90) or to the interface plane (θ ≤ 90); zero at 90°
//! - z: interplanar spacing at the interface (segment height)

use super::density::{area_to_atoms, volume_to_atoms};
use super::errors::Result;
use super::{surface_area, AtomCounts};
use crate::crystal::{ConstantsCache, Facet};
use crate::geometry::cap::{validate_angle, validate_radius};
use crate::geometry::total_cap_volume;
use crate::utils::constants::SMALL_RADIUS_THRESHOLD;
use crate::utils::{Advisory, Outcome};

/// Volumes of the three regions, in Å³
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionVolumes {
    /// Interfacial segment volume, excluding the perimeter ring
    pub interface: f64,
    /// Perimeter ring volume
    pub perimeter: f64,
    /// Total cap volume
    pub total: f64,
}

/// Wikipedia spherical-segment volume: π·z·(3·(a² + b²) + z²)/6 for a
/// segment of height z with end radii a and b
fn segment_volume(bottom_radius: f64, top_radius: f64, height: f64) -> f64 {
    std::f64::consts::PI
        * height
        * (3.0 * (bottom_radius * bottom_radius + top_radius * top_radius) + height * height)
        / 6.0
}

/// Compute interface, perimeter, and total volumes.
///
/// An interior segment whose top radius would be imaginary (the peel
/// over-shaves the cap) is clamped to zero volume with a
/// [`Advisory::NoInteriorRegion`]; that is expected behavior for small
/// footprints or shallow contact angles, not an error.
pub fn volumes(
    cache: &ConstantsCache,
    element: &str,
    footprint_radius: f64,
    theta: f64,
    interface_facet: Option<Facet>,
) -> Result<Outcome<RegionVolumes>> {
    validate_angle(theta)?;
    validate_radius(footprint_radius)?;

    let mut outcome = Outcome::new(());
    let r = footprint_radius;
    if r < SMALL_RADIUS_THRESHOLD {
        outcome.push(
            Advisory::SmallRadius {
                radius: r,
                threshold: SMALL_RADIUS_THRESHOLD,
            }
            .emit(),
        );
    }

    let constants = outcome.absorb(cache.constants(element, interface_facet)?);
    let z = constants.interplanar_spacing;
    let d = constants.atomic_diameter;

    let big_r = r / theta.to_radians().sin();
    // no reliable formula for the radial peel; taken as one atomic
    // diameter, clipped so tiny footprints do not go negative
    let r2 = (r - d).max(0.0);

    // The two angle regimes take different roots of the cap equation.
    // In both, x2 follows from R^2 = (h+z)^2 + r^2 with r2 substituted
    // for r; the +z^2 form of the upper branch is the authoritative
    // sign convention.
    let (x, x2) = if theta > 90.0 {
        let h = (big_r * big_r - r * r).sqrt() - z;
        let x = (big_r * big_r - h * h).sqrt();
        let x2 = (2.0 * h * z + z * z + r2 * r2).sqrt();
        (x, x2)
    } else {
        let h = (big_r * big_r - r * r).max(0.0).sqrt();
        let x = (big_r * big_r - (h + z) * (h + z)).sqrt();
        let x2 = (h * h - (h + z) * (h + z) + r2 * r2).sqrt();
        (x, x2)
    };

    let segment = segment_volume(r, x, z);
    let mut interface = segment_volume(r2, x2, z);
    if interface.is_nan() {
        outcome.push(
            Advisory::NoInteriorRegion {
                footprint_radius: r,
                theta,
            }
            .emit(),
        );
        interface = 0.0;
    }
    let perimeter = segment - interface;

    let total = outcome.absorb(total_cap_volume(r, theta, SMALL_RADIUS_THRESHOLD)?);

    let mut result = outcome.map(|_| RegionVolumes {
        interface,
        perimeter,
        total,
    });
    result.dedup_advisories();
    Ok(result)
}

/// Full volume-based atom counts.
///
/// Interface, perimeter, and total counts all convert volumes through
/// the bulk density (unlike the area method); the surface count comes
/// separately from the outer surface area and the surface facet's areal
/// density.
pub fn by_volume(
    cache: &ConstantsCache,
    element: &str,
    footprint_radius: f64,
    theta: f64,
    interface_facet: Option<Facet>,
    surface_facet: Option<Facet>,
) -> Result<Outcome<AtomCounts>> {
    let mut outcome = Outcome::new(());

    let region_volumes = outcome.absorb(volumes(
        cache,
        element,
        footprint_radius,
        theta,
        interface_facet,
    )?);

    let interface =
        outcome.absorb(volume_to_atoms(cache, region_volumes.interface, element, None)?);
    let perimeter =
        outcome.absorb(volume_to_atoms(cache, region_volumes.perimeter, element, None)?);
    let total = outcome.absorb(volume_to_atoms(cache, region_volumes.total, element, None)?);

    let outer_area = outcome.absorb(surface_area(
        cache,
        element,
        footprint_radius,
        theta,
        interface_facet,
    )?);
    let surface = outcome.absorb(area_to_atoms(cache, outer_area, element, surface_facet)?);

    let mut result = outcome.map(|_| AtomCounts {
        perimeter,
        interface,
        surface,
        total,
    });
    result.dedup_advisories();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fe_hemisphere_volumes() {
        let cache = ConstantsCache::new();
        let region_volumes = volumes(
            &cache,
            "Fe",
            66.0,
            90.0,
            Some(Facet { h: 1, k: 1, l: 1 }),
        )
        .unwrap()
        .into_value();
        assert_abs_diff_eq!(region_volumes.interface, 10442.0, epsilon = 2.0);
        assert_abs_diff_eq!(region_volumes.perimeter, 888.0, epsilon = 2.0);
        assert_abs_diff_eq!(region_volumes.total, 602130.0, epsilon = 2.0);
    }

    #[test]
    fn test_no_interior_clamps_to_zero() {
        let cache = ConstantsCache::new();
        let outcome = volumes(
            &cache,
            "Ti",
            1.2,
            134.0,
            Some(Facet { h: 1, k: 0, l: 0 }),
        )
        .unwrap();
        assert_eq!(outcome.value.interface, 0.0);
        assert!(outcome
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::NoInteriorRegion { .. })));
        assert!(outcome
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::SmallRadius { .. })));
    }
}
