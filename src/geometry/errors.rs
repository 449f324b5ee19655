/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Error types for spherical-cap geometry

/// Errors that can occur in cap-geometry evaluations
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Contact angle of {0} deg not allowed")]
    InvalidAngle(f64),

    #[error("Footprint radius {0} Ang is <= 0, invalid")]
    InvalidRadius(f64),
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
