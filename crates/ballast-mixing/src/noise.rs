//! Noise sources for turbulent mixing.
//!
//! Respects the determinism contract: the production source reseeds a
//! ChaCha8 RNG from `seed XOR tick` on every fill, producing identical
//! noise for identical seed and tick regardless of call history.

use ballast_core::TickId;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A per-tick source of turbulence noise.
///
/// Implementations fill one draw per cell. The engine owns a single
/// boxed source per session; `&mut self` permits internal RNG state.
pub trait NoiseSource: Send {
    /// Fill `out` with one noise draw per cell for the given tick.
    fn fill(&mut self, tick: TickId, out: &mut [f32]);

    /// Replace the seed material. Sources without seed state ignore this.
    fn reseed(&mut self, seed: u64) {
        let _ = seed;
    }
}

/// Uniform turbulence noise in `[-amplitude, +amplitude]`.
///
/// Each fill seeds a fresh `ChaCha8Rng` from `seed XOR tick`, so a given
/// (seed, tick, cell count) always yields bit-identical output. Two
/// sessions with the same seed replay the same turbulence.
#[derive(Clone, Debug)]
pub struct UniformTurbulence {
    amplitude: f64,
    seed: u64,
}

impl UniformTurbulence {
    /// Create a source with the given amplitude and seed.
    ///
    /// Amplitude is not validated here; construct through
    /// [`MixingUpdate::builder`](crate::update::MixingUpdate::builder)
    /// for validated configuration.
    pub fn new(amplitude: f64, seed: u64) -> Self {
        Self { amplitude, seed }
    }

    /// The configured noise amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// The current seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NoiseSource for UniformTurbulence {
    fn fill(&mut self, tick: TickId, out: &mut [f32]) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ tick.0);
        for v in out.iter_mut() {
            let u: f64 = rng.random::<f64>() * 2.0 - 1.0;
            *v = (self.amplitude * u) as f32;
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }
}
