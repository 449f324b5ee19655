/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Advisory notices carried alongside computed values.
//!
//! Several quantities in this crate are well-defined but sit in regimes
//! where the underlying model degrades (very small caps, assumed default
//! facets, vanished interior regions). Those conditions are not errors:
//! the computation proceeds, and the caller receives the value together
//! with a list of [`Advisory`] notices describing what was assumed or
//! clamped. Every advisory is also logged at `warn` level when it is
//! created, so batch runs leave a diagnostic trail without the caller
//! having to unpack each result.

use std::fmt;

use log::warn;

use crate::crystal::Facet;

/// A non-fatal notice attached to a computed value
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The footprint radius is small enough that the spherical-cap
    /// idealization may be tenuous
    SmallRadius { radius: f64, threshold: f64 },

    /// No facet was supplied; the per-lattice default was assumed
    AssumedDefaultFacet { element: String, facet: Facet },

    /// Peeling one atomic diameter off the footprint over-shaved the
    /// cap: no non-perimeter interior exists for this geometry, and the
    /// interface volume was clamped to zero
    NoInteriorRegion { footprint_radius: f64, theta: f64 },

    /// A contact angle outside [0, 180] degrees was evaluated
    AngleOutOfRange { theta: f64 },

    /// The nanoparticle element's crystal system has no tabulated bulk
    /// coordination number; the fcc/hcp cutoff was used instead
    UnrecognizedLattice { element: String, fallback: u32 },

    /// The oracle found no bonds between the nanoparticle and the
    /// support; the classification result is the all-empty sentinel
    NoInterfaceBonds,
}

impl Advisory {
    /// Log this advisory at `warn` level and return it, so creation and
    /// emission read as one expression at the call site.
    pub fn emit(self) -> Self {
        warn!("{}", self);
        self
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::SmallRadius { radius, threshold } => write!(
                f,
                "small footprint radius ({} Ang, threshold {} Ang): \
                 a spherical cap approximation may be tenuous",
                radius, threshold
            ),
            Advisory::AssumedDefaultFacet { element, facet } => write!(
                f,
                "facet not given for {}, will assume {}",
                element, facet
            ),
            Advisory::NoInteriorRegion {
                footprint_radius,
                theta,
            } => write!(
                f,
                "footprint radius ({} Ang) and/or contact angle ({} deg) too small: \
                 no non-perimeter interior exists for this combination",
                footprint_radius, theta
            ),
            Advisory::AngleOutOfRange { theta } => {
                write!(f, "contact angle {} deg is outside [0, 180]", theta)
            }
            Advisory::UnrecognizedLattice { element, fallback } => write!(
                f,
                "crystal system of {} is neither fcc, hcp, nor bcc; \
                 using coordination cutoff {}",
                element, fallback
            ),
            Advisory::NoInterfaceBonds => {
                write!(f, "no nanoparticle-support bonds found")
            }
        }
    }
}

/// A computed value plus the advisories raised while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// The computed value
    pub value: T,
    /// Advisories raised during the computation, in order of occurrence
    pub advisories: Vec<Advisory>,
}

impl<T> Outcome<T> {
    /// Wrap a value with no advisories
    pub fn new(value: T) -> Self {
        Self {
            value,
            advisories: Vec::new(),
        }
    }

    /// Wrap a value with a list of advisories
    pub fn with(value: T, advisories: Vec<Advisory>) -> Self {
        Self { value, advisories }
    }

    /// Attach one more advisory
    pub fn push(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }

    /// Absorb the advisories of another outcome, returning its value
    pub fn absorb<U>(&mut self, other: Outcome<U>) -> U {
        self.advisories.extend(other.advisories);
        other.value
    }

    /// Transform the value, keeping the advisories
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            advisories: self.advisories,
        }
    }

    /// Drop duplicate advisories, preserving first occurrences. Useful
    /// when two internal stages validated the same inputs.
    pub fn dedup_advisories(&mut self) {
        let mut seen: Vec<Advisory> = Vec::new();
        self.advisories.retain(|a| {
            if seen.contains(a) {
                false
            } else {
                seen.push(a.clone());
                true
            }
        });
    }

    /// Discard the advisories and return the bare value
    pub fn into_value(self) -> T {
        self.value
    }
}
