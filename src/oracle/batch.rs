/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Order-preserving parallel classification of independent structures.
//!
//! Structures in a batch share nothing, so the batch is an
//! embarrassingly parallel map. Results are collected by task position,
//! never by completion order, and each item carries its own
//! result-or-error so one degenerate structure cannot corrupt or abort
//! the rest of the batch.

use rayon::prelude::*;

use super::classify::{discriminate, ClassifierConfig, RegionLabeling};
use super::errors::{OracleError, Result};
use crate::atoms::AtomicStructure;
use crate::utils::Outcome;

/// Per-structure classification result within a batch
pub type StructureResult = std::result::Result<Outcome<RegionLabeling>, OracleError>;

/// Classify every structure of a batch in parallel.
///
/// Each structure's nanoparticle species comes from its own tag.
/// `workers = None` (or `Some(0)`) uses all available cores; `Some(n)`
/// runs on a scoped pool of n threads. The returned vector has one
/// entry per input structure, in input order.
pub fn discriminate_batch(
    structures: &[AtomicStructure],
    config: &ClassifierConfig,
    workers: Option<usize>,
) -> Result<Vec<StructureResult>> {
    let run = || {
        structures
            .par_iter()
            .map(|structure| discriminate(structure, None, None, config))
            .collect()
    };

    match workers {
        None | Some(0) => Ok(run()),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| OracleError::ThreadPool(e.to_string()))?;
            Ok(pool.install(run))
        }
    }
}
