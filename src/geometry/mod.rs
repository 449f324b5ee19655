/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Spherical-cap geometry shared by both counting methods.

pub mod cap;
pub mod errors;

pub use cap::{alpha, beta, effective_contact_angle, outer_surface_area, total_cap_volume};
pub use errors::{GeometryError, Result};
