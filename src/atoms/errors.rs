/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Element type {0} not supported")]
    UnknownElement(String),

    #[error("Atom index {0} out of range")]
    IndexOutOfRange(usize),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
