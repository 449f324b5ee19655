/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Atomistic oracle: region discrimination of real atom positions.
//!
//! Where the estimators predict counts from three macroscopic
//! parameters, this module takes a constructed atomic structure and
//! classifies every nanoparticle atom into bulk, surface, interface, or
//! perimeter by local coordination geometry. Comparing the two outputs
//! on equivalent parameters is how the closed-form methods are
//! validated.

pub mod batch;
pub mod classify;
pub mod errors;
pub mod neighbors;

pub use batch::{discriminate_batch, StructureResult};
pub use classify::{
    discriminate, get_interface, get_perimeter, surface_by_coordination, ClassifierConfig,
    RegionLabeling, BCC_COORD_CUTOFF, FCC_HCP_COORD_CUTOFF, INTERFACE_SCALING, INTERFACE_SKIN,
    SURFACE_SCALING, SURFACE_SKIN,
};
pub use errors::{OracleError, Result};
pub use neighbors::{natural_cutoffs, NeighborGraph};
