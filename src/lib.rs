/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! # npcount-rs
//!
//! Atom counting for supported nanoparticles modeled as spherical caps.
//!
//! Given an element, a footprint (or curvature) radius, and a contact
//! angle, the [`estimator`] module produces closed-form estimates of how
//! many atoms sit in the perimeter, interface, surface, and bulk of the
//! particle, through either an area-based or a volume-based method. The
//! [`oracle`] module classifies real atom positions of a constructed
//! structure into the same four regions by coordination geometry, as the
//! atomistic ground truth the estimates are validated against.
//!
//! ```no_run
//! use npcount_rs::crystal::ConstantsCache;
//! use npcount_rs::estimator::by_volume;
//!
//! let cache = ConstantsCache::new();
//! let outcome = by_volume(&cache, "Ni", 150.0, 90.0, None, None)?;
//! let counts = outcome.value;
//! println!("{} interfacial atoms", counts.interface);
//! # Ok::<(), npcount_rs::estimator::EstimatorError>(())
//! ```

pub mod atoms;
pub mod cli;
pub mod crystal;
pub mod estimator;
pub mod geometry;
pub mod input;
pub mod oracle;
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crystal::{ConstantsCache, CrystalConstants, Facet};
pub use estimator::{AtomCounts, CountingMethod};
pub use oracle::{ClassifierConfig, RegionLabeling};
pub use utils::{Advisory, Outcome};
