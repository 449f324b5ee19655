/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Physical constants and advisory thresholds used throughout the crate.
//!
//! All lengths are in Ångström, areas in Å², volumes in Å³.

/// Avogadro's number, atoms per mole (2019 SI exact value)
pub const AVOGADRO: f64 = 6.02214076e23;

/// Footprint radius (Å) below which the estimators warn that the
/// spherical-cap idealization is tenuous
pub const SMALL_RADIUS_THRESHOLD: f64 = 5.0;

/// Footprint radius (Å) below which the total-cap-volume helper warns
/// when reached through the area method. Historically distinct from
/// [`SMALL_RADIUS_THRESHOLD`]; the two call sites are not unified.
pub const TOTAL_VOLUME_RADIUS_THRESHOLD: f64 = 10.0;
