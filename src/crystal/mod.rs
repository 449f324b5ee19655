/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Crystallographic lookups: facets, interplanar spacings, and the
//! memoized crystal-constants cache.

pub mod constants;
pub mod errors;
pub mod facet;
pub mod spacing;

pub use constants::{constants, ConstantsCache, CrystalConstants};
pub use errors::{CrystalError, Result};
pub use facet::Facet;
pub use spacing::interplanar_spacing;
