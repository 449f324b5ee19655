/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Shared utilities: physical constants and the advisory side-channel.

pub mod advisory;
pub mod constants;

pub use advisory::{Advisory, Outcome};
pub use constants::AVOGADRO;
