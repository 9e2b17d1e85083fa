//! The per-tick mixing update.
//!
//! One update: `cell = clamp((cell + flow * noise) * (1 - eff / 100), 0, 1)`
//! for every cell. Constructed via the builder pattern:
//! [`MixingUpdate::builder`].

use ballast_core::{ConcentrationGrid, MixingError, TickId};

use crate::noise::{NoiseSource, UniformTurbulence};

/// Default turbulence amplitude: draws in `[-0.05, 0.05]`.
pub const DEFAULT_AMPLITUDE: f64 = 0.05;

/// Apply one mixing step to `grid` with caller-supplied noise.
///
/// For each cell: add `flow_rate * noise`, multiply by the decay factor
/// `1 - efficiency_pct / 100`, clamp to `[0, 1]`. The three stages are
/// per-cell independent, so they run as a single fused pass.
///
/// No parameter validation happens here; out-of-range efficiency is
/// mathematically defined and neutralized by the clamp.
///
/// # Errors
///
/// Returns [`MixingError::ShapeMismatch`] without touching the grid if
/// `noise.len()` differs from the grid's cell count.
pub fn apply_with_noise(
    grid: &mut ConcentrationGrid,
    flow_rate: f64,
    efficiency_pct: f64,
    noise: &[f32],
) -> Result<(), MixingError> {
    if noise.len() != grid.cell_count() {
        return Err(MixingError::ShapeMismatch {
            grid_cells: grid.cell_count(),
            noise_cells: noise.len(),
        });
    }
    let flow = flow_rate as f32;
    let decay = (1.0 - efficiency_pct / 100.0) as f32;
    for (cell, &n) in grid.as_mut_slice().iter_mut().zip(noise) {
        *cell = ((*cell + flow * n) * decay).clamp(0.0, 1.0);
    }
    Ok(())
}

/// The Field Updater: owns a noise source and a scratch buffer, and
/// applies one mixing step per tick.
///
/// Stateful only in its RNG seed and scratch allocation; the same
/// (seed, tick, grid) always produces the same output.
pub struct MixingUpdate {
    noise: Box<dyn NoiseSource>,
    scratch: Vec<f32>,
}

/// Builder for [`MixingUpdate`].
pub struct MixingUpdateBuilder {
    amplitude: f64,
    seed: u64,
    source: Option<Box<dyn NoiseSource>>,
}

impl MixingUpdate {
    /// Create a new builder with default amplitude and seed 0.
    pub fn builder() -> MixingUpdateBuilder {
        MixingUpdateBuilder {
            amplitude: DEFAULT_AMPLITUDE,
            seed: 0,
            source: None,
        }
    }

    /// Create an update around an existing noise source.
    pub fn with_source(noise: Box<dyn NoiseSource>) -> Self {
        Self {
            noise,
            scratch: Vec::new(),
        }
    }

    /// Apply one mixing step to `grid` for the given tick.
    ///
    /// Draws fresh noise from the configured source, then runs
    /// [`apply_with_noise`].
    ///
    /// # Errors
    ///
    /// Propagates [`MixingError`] from [`apply_with_noise`].
    pub fn apply(
        &mut self,
        grid: &mut ConcentrationGrid,
        flow_rate: f64,
        efficiency_pct: f64,
        tick: TickId,
    ) -> Result<(), MixingError> {
        self.scratch.resize(grid.cell_count(), 0.0);
        self.noise.fill(tick, &mut self.scratch);
        apply_with_noise(grid, flow_rate, efficiency_pct, &self.scratch)
    }

    /// Reseed the underlying noise source (used on session reset).
    pub fn reseed(&mut self, seed: u64) {
        self.noise.reseed(seed);
    }
}

impl std::fmt::Debug for MixingUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MixingUpdate")
            .field("scratch_len", &self.scratch.len())
            .finish()
    }
}

impl MixingUpdateBuilder {
    /// Set the turbulence amplitude (default: 0.05). Must be finite and >= 0.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a custom noise source instead of [`UniformTurbulence`].
    ///
    /// When set, `amplitude` and `seed` are ignored.
    pub fn noise_source(mut self, source: Box<dyn NoiseSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the update, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no custom source is set and `amplitude` is
    /// negative or non-finite.
    pub fn build(self) -> Result<MixingUpdate, String> {
        let noise: Box<dyn NoiseSource> = match self.source {
            Some(source) => source,
            None => {
                if !self.amplitude.is_finite() || self.amplitude < 0.0 {
                    return Err(format!(
                        "amplitude must be finite and >= 0, got {}",
                        self.amplitude
                    ));
                }
                Box::new(UniformTurbulence::new(self.amplitude, self.seed))
            }
        };
        Ok(MixingUpdate::with_source(noise))
    }
}
