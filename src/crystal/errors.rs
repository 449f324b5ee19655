/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Error types for crystallographic lookups

use super::facet::Facet;

/// Errors that can occur while resolving crystal constants
#[derive(Debug, thiserror::Error)]
pub enum CrystalError {
    #[error("Element type {0} not supported")]
    UnknownElement(String),

    #[error("Facet cannot be {0}")]
    InvalidFacet(Facet),

    #[error("No tabulated interplanar spacing for {element} {facet}")]
    UnsupportedFacet { element: String, facet: Facet },

    #[error("Cannot parse facet from {0:?}")]
    FacetParse(String),
}

/// Result type for crystal operations
pub type Result<T> = std::result::Result<T, CrystalError>;
