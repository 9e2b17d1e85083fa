//! Turbulent mixing field update for the ballast water exchange simulator.
//!
//! The per-tick field update: add flow-scaled turbulence noise to every
//! cell, apply the global exchange-efficiency decay, and clamp the result
//! to the unit interval. Noise generation is an injectable dependency so
//! tests can drive deterministic (e.g. all-zero) noise.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod noise;
pub mod update;

pub use noise::{NoiseSource, UniformTurbulence};
pub use update::{apply_with_noise, MixingUpdate, MixingUpdateBuilder};
