/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Scalar formulas of the spherical-cap model.
//!
//! A supported nanoparticle is idealized as the cap a plane cuts from a
//! sphere: the footprint radius r is the radius of the contact disc, and
//! the contact angle θ (degrees) is measured between the support plane
//! and the particle surface at the contact line. The two constants
//! α(θ) = 1/(1+cos θ) and β(θ) = (2+cos θ)(1−cos θ)/sin θ recur in
//! every cap quantity.

use log::warn;

use super::errors::{GeometryError, Result};
use crate::utils::{Advisory, Outcome};

/// Check θ against the model's domain: inside [0, 180] and not on
/// either degenerate endpoint (a flat film or a detached sphere).
pub(crate) fn validate_angle(theta: f64) -> Result<()> {
    if !(0.0..=180.0).contains(&theta) || theta == 0.0 || theta == 180.0 {
        return Err(GeometryError::InvalidAngle(theta));
    }
    Ok(())
}

/// Check that a footprint radius is positive.
pub(crate) fn validate_radius(footprint_radius: f64) -> Result<()> {
    if !(footprint_radius > 0.0) {
        return Err(GeometryError::InvalidRadius(footprint_radius));
    }
    Ok(())
}

/// The cap constant α(θ) = 1/(1 + cos θ), θ in degrees.
///
/// At θ = 180° this is +∞, a legitimate limiting value (the cap closes
/// into a full sphere of vanishing contact). Angles outside [0, 180] are
/// logged but still evaluated; callers that need the strict domain
/// validate before calling.
pub fn alpha(theta: f64) -> f64 {
    if !(0.0..=180.0).contains(&theta) {
        warn!("{}", Advisory::AngleOutOfRange { theta });
    }
    1.0 / (1.0 + theta.to_radians().cos())
}

/// The cap constant β(θ) = (2 + cos θ)(1 − cos θ)/sin θ, θ in degrees.
///
/// Fails for θ ∈ {0, 180} (division by zero) and outside [0, 180].
pub fn beta(theta: f64) -> Result<f64> {
    validate_angle(theta)?;
    let rad = theta.to_radians();
    Ok((2.0 + rad.cos()) * (1.0 - rad.cos()) / rad.sin())
}

/// Total volume of the spherical cap, π·r³·α·β/3, in Å³.
///
/// `warn_threshold` is the footprint radius below which a
/// [`Advisory::SmallRadius`] is attached; the area and volume methods
/// historically warn at different radii (10 and 5 Å), so the threshold
/// belongs to the call site.
pub fn total_cap_volume(
    footprint_radius: f64,
    theta: f64,
    warn_threshold: f64,
) -> Result<Outcome<f64>> {
    validate_angle(theta)?;

    let mut outcome = Outcome::new(
        std::f64::consts::PI * footprint_radius.powi(3) * alpha(theta) * beta(theta)? / 3.0,
    );
    if footprint_radius <= warn_threshold {
        outcome.push(
            Advisory::SmallRadius {
                radius: footprint_radius,
                threshold: warn_threshold,
            }
            .emit(),
        );
    }
    Ok(outcome)
}

/// Contact angle (degrees) the cap would present after being shaved
/// down by one interplanar spacing z at the interface:
/// arccos(clip(cos θ + (z/r)·sin θ, −1, 1)).
///
/// The clip absorbs the case z/r too large for any real shaved cap; the
/// result then degenerates to 0°.
pub fn effective_contact_angle(footprint_radius: f64, theta: f64, spacing: f64) -> f64 {
    let rad = theta.to_radians();
    let arg = (rad.cos() + (spacing / footprint_radius) * rad.sin()).clamp(-1.0, 1.0);
    arg.acos().to_degrees()
}

/// Area of the nanoparticle's outer (vacuum-facing) surface, in Å²,
/// excluding the interfacial disc and the perimeter side wall:
/// 2π·r²·α(θ′) with θ′ the effective contact angle after shaving one
/// interfacial interplanar spacing.
pub fn outer_surface_area(footprint_radius: f64, theta: f64, spacing: f64) -> Result<f64> {
    validate_angle(theta)?;
    validate_radius(footprint_radius)?;

    let shaved = effective_contact_angle(footprint_radius, theta, spacing);
    Ok(2.0 * std::f64::consts::PI * footprint_radius.powi(2) * alpha(shaved))
}
