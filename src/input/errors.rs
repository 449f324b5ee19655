/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Error types for tabular input and output

use std::io;

use thiserror::Error;

use crate::atoms::AtomError;
use crate::crystal::CrystalError;

/// Errors that can occur while reading or writing tables
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Column mismatch: found {found:?}, expected {expected:?}")]
    ColumnMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line}: neither footprint radius nor curvature radius given")]
    MissingRadius { line: usize },

    #[error("Facet error: {0}")]
    Facet(#[from] CrystalError),

    #[error("Structure file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Atom error: {0}")]
    Atom(#[from] AtomError),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
