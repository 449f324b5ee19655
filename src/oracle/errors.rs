/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Error types for the atomistic oracle

use crate::atoms::AtomError;

/// Errors that can occur during atomistic classification
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("No covalent radius tabulated for species {0}")]
    UnknownSpecies(String),

    #[error("Species {0} not present in the structure")]
    MissingSpecies(String),

    #[error("No nanoparticle element given and the structure carries no tag")]
    NoNanoparticleElement,

    #[error("Atom error: {0}")]
    Atom(#[from] AtomError),

    #[error("Worker pool error: {0}")]
    ThreadPool(String),
}

/// Result type for oracle operations
pub type Result<T> = std::result::Result<T, OracleError>;
