/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Error types for the closed-form estimators

use crate::crystal::CrystalError;
use crate::geometry::GeometryError;

/// Errors that can occur while estimating atom counts
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("Crystal lookup error: {0}")]
    Crystal(#[from] CrystalError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

impl EstimatorError {
    /// Whether this error came from contact-angle validation
    pub fn is_invalid_angle(&self) -> bool {
        matches!(self, EstimatorError::Geometry(GeometryError::InvalidAngle(_)))
    }

    /// Whether this error came from footprint-radius validation
    pub fn is_invalid_radius(&self) -> bool {
        matches!(self, EstimatorError::Geometry(GeometryError::InvalidRadius(_)))
    }
}

/// Result type for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;
