//! Test utilities and noise doubles for ballast simulator development.
//!
//! Provides deterministic [`NoiseSource`] implementations for verifying
//! the clamp and decay properties exactly, plus parameter fixtures
//! matching the demonstrator's default slider values.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ballast_core::{ExchangeParams, TankGeometry, TickId};
use ballast_mixing::NoiseSource;

/// Noise source that always produces zero noise.
///
/// Isolates the decay term of the mixing update: with zero noise the
/// update reduces to `cell * (1 - eff / 100)` followed by the clamp.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn fill(&mut self, _tick: TickId, out: &mut [f32]) {
        out.fill(0.0);
    }
}

/// Noise source that fills every cell with the same fixed value.
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f32);

impl NoiseSource for ConstantNoise {
    fn fill(&mut self, _tick: TickId, out: &mut [f32]) {
        out.fill(self.0);
    }
}

/// Noise source replaying a fixed buffer, cycling if the grid is larger.
///
/// Useful for asserting the exact arithmetic of a single update.
#[derive(Clone, Debug)]
pub struct RecordedNoise {
    values: Vec<f32>,
}

impl RecordedNoise {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }
}

impl NoiseSource for RecordedNoise {
    fn fill(&mut self, _tick: TickId, out: &mut [f32]) {
        if self.values.is_empty() {
            out.fill(0.0);
            return;
        }
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.values[i % self.values.len()];
        }
    }
}

/// Parameters matching the demonstrator's default slider values:
/// 50 m x 20 m x 10 m tank, 1 m³/s flow, 80% exchange efficiency.
pub fn default_params() -> ExchangeParams {
    ExchangeParams {
        tank: TankGeometry {
            length_m: 50.0,
            width_m: 20.0,
            height_m: 10.0,
        },
        flow_rate_m3s: 1.0,
        efficiency_pct: 80.0,
    }
}

/// [`default_params`] with a different flow rate.
pub fn params_with_flow(flow_rate_m3s: f64) -> ExchangeParams {
    ExchangeParams {
        flow_rate_m3s,
        ..default_params()
    }
}

/// [`default_params`] with a different exchange efficiency.
pub fn params_with_efficiency(efficiency_pct: f64) -> ExchangeParams {
    ExchangeParams {
        efficiency_pct,
        ..default_params()
    }
}
