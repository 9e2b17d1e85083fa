//! The simulation session: exclusive state and the tick loop.
//!
//! # Ownership model
//!
//! [`Session`] is [`Send`] (can be moved between threads) but mutates
//! through `&mut self` only, so there is exactly one writer and no
//! locking. Ticks run to completion; suspension happens only between
//! ticks, at the caller. Multiple sessions are fully isolated — each
//! carries its own grid, counter, series, and RNG seed.

use std::time::Instant;

use ballast_core::{ConcentrationGrid, ExchangeParams, StepError, TickId};
use ballast_metrics::{EfficiencySeries, ExchangeRecorder, FlowRateSeries, TankAreaSeries};
use ballast_mixing::{MixingUpdate, UniformTurbulence};

use crate::config::{ConfigError, SessionConfig};
use crate::metrics::StepMetrics;

// Compile-time assertion: Session is Send (boxed noise sources are Send
// by the NoiseSource trait bound).
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Session>();
    }
};

/// Result of a successful [`Session::advance_tick`] call.
#[derive(Clone, Copy, Debug)]
pub struct TickOutcome {
    /// The tick that just completed (1 on the first call).
    pub tick: TickId,
    /// Grid-wide average concentration recorded this tick.
    pub avg_concentration: f64,
    /// Whether the flow-rate series accepted a new sample.
    pub flow_sample_appended: bool,
    /// Timing metrics for this tick.
    pub metrics: StepMetrics,
}

/// One continuous simulation run holding exclusive state from
/// initialization to teardown.
///
/// Initial state: all-ones grid, tick 0, empty series. Each
/// [`advance_tick`](Session::advance_tick) runs the mixing update first
/// and the metrics recorder second on the updated grid; no component
/// runs out of that order.
///
/// # Example
///
/// ```
/// use ballast_core::{ExchangeParams, TankGeometry, TickId};
/// use ballast_engine::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default()).unwrap();
/// let params = ExchangeParams {
///     tank: TankGeometry { length_m: 50.0, width_m: 20.0, height_m: 10.0 },
///     flow_rate_m3s: 1.0,
///     efficiency_pct: 80.0,
/// };
/// let outcome = session.advance_tick(&params).unwrap();
/// assert_eq!(outcome.tick, TickId(1));
/// assert_eq!(session.efficiency_over_time().len(), 1);
/// ```
pub struct Session {
    grid: ConcentrationGrid,
    tick: TickId,
    update: MixingUpdate,
    recorder: ExchangeRecorder,
    last_metrics: StepMetrics,
    seed: u64,
}

impl Session {
    /// Create a session from a [`SessionConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation or
    /// the grid cannot be constructed.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = ConcentrationGrid::uniform(config.rows, config.cols, 1.0)?;
        let update = MixingUpdate::with_source(Box::new(UniformTurbulence::new(
            config.noise_amplitude,
            config.seed,
        )));
        Ok(Self {
            grid,
            tick: TickId(0),
            update,
            recorder: ExchangeRecorder::new(),
            last_metrics: StepMetrics::default(),
            seed: config.seed,
        })
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Order within the tick: validate parameters, increment the
    /// counter, run the mixing update, record the derived series from
    /// the post-update grid. A failed tick leaves the session
    /// observably unchanged (parameters are checked before any
    /// mutation and the counter only commits on success).
    ///
    /// # Errors
    ///
    /// - [`StepError::InvalidParams`] for non-positive or non-finite
    ///   tank dimensions or flow rate (the tick is rejected).
    /// - [`StepError::MixingFailed`] if the update's preconditions fail.
    /// - [`StepError::RecordFailed`] if the grid mean is undefined.
    pub fn advance_tick(&mut self, params: &ExchangeParams) -> Result<TickOutcome, StepError> {
        let tick_started = Instant::now();
        params.validate()?;

        let tick = self.tick.next();

        let update_started = Instant::now();
        self.update
            .apply(&mut self.grid, params.flow_rate_m3s, params.efficiency_pct, tick)?;
        let update_us = elapsed_us(update_started);

        let record_started = Instant::now();
        let recorded = self
            .recorder
            .record(&self.grid, tick, params.flow_rate_m3s, params.tank.area_m2())
            .map_err(StepError::RecordFailed)?;
        let record_us = elapsed_us(record_started);

        self.tick = tick;
        let metrics = StepMetrics {
            total_us: elapsed_us(tick_started),
            update_us,
            record_us,
        };
        self.last_metrics = metrics;

        Ok(TickOutcome {
            tick,
            avg_concentration: recorded.avg_concentration,
            flow_sample_appended: recorded.flow_sample_appended,
            metrics,
        })
    }

    /// Reset to the initial state (all-ones grid, tick 0, empty series)
    /// with a new seed.
    pub fn reset(&mut self, seed: u64) {
        self.grid.fill(1.0);
        self.tick = TickId(0);
        self.recorder.clear();
        self.update.reseed(seed);
        self.last_metrics = StepMetrics::default();
        self.seed = seed;
    }

    /// The concentration grid after the most recent tick.
    ///
    /// Read-only: the presentation layer renders from this view and
    /// must never mutate it.
    pub fn grid(&self) -> &ConcentrationGrid {
        &self.grid
    }

    /// Average concentration per tick.
    pub fn efficiency_over_time(&self) -> &EfficiencySeries {
        self.recorder.efficiency_over_time()
    }

    /// Flow-rate impact series (adjacent-duplicate suppressed).
    pub fn flow_rate_impact(&self) -> &FlowRateSeries {
        self.recorder.flow_rate_impact()
    }

    /// Tank-area impact series (appended every tick).
    pub fn tank_area_impact(&self) -> &TankAreaSeries {
        self.recorder.tank_area_impact()
    }

    /// Current tick (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Timing metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The current simulation seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current_tick", &self.tick)
            .field("seed", &self.seed)
            .field("grid", &format_args!("{}x{}", self.grid.rows(), self.grid.cols()))
            .finish()
    }
}

fn elapsed_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballast_core::ParamError;
    use ballast_test_utils::{default_params, params_with_flow};
    use proptest::prelude::*;

    fn small_config(rows: u32, cols: u32, seed: u64) -> SessionConfig {
        SessionConfig {
            rows,
            cols,
            seed,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn new_creates_session_at_tick_zero() {
        let session = Session::new(small_config(10, 10, 42)).unwrap();
        assert_eq!(session.current_tick(), TickId(0));
        assert_eq!(session.seed(), 42);
        assert!(session.grid().as_slice().iter().all(|&v| v == 1.0));
        assert!(session.efficiency_over_time().is_empty());
        assert!(session.flow_rate_impact().is_empty());
        assert!(session.tank_area_impact().is_empty());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result = Session::new(small_config(0, 10, 0));
        assert!(matches!(result, Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn advance_tick_increments_counter() {
        let mut session = Session::new(small_config(10, 10, 0)).unwrap();
        let outcome = session.advance_tick(&default_params()).unwrap();
        assert_eq!(outcome.tick, TickId(1));
        assert_eq!(session.current_tick(), TickId(1));

        session.advance_tick(&default_params()).unwrap();
        assert_eq!(session.current_tick(), TickId(2));
    }

    #[test]
    fn rejected_tick_leaves_session_unchanged() {
        let mut session = Session::new(small_config(5, 5, 0)).unwrap();
        session.advance_tick(&default_params()).unwrap();
        let grid_before = session.grid().clone();

        let mut bad = default_params();
        bad.flow_rate_m3s = -1.0;
        let err = session.advance_tick(&bad).unwrap_err();
        assert!(matches!(
            err,
            StepError::InvalidParams(ParamError::NonPositiveFlowRate { .. })
        ));

        assert_eq!(session.current_tick(), TickId(1));
        assert_eq!(session.grid(), &grid_before);
        assert_eq!(session.efficiency_over_time().len(), 1);
    }

    #[test]
    fn outcome_mean_matches_series() {
        let mut session = Session::new(small_config(8, 8, 9)).unwrap();
        let outcome = session.advance_tick(&default_params()).unwrap();
        let latest = session.efficiency_over_time().latest().unwrap();
        assert_eq!(latest.avg_concentration, outcome.avg_concentration);
        assert_eq!(latest.tick, TickId(1));
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut session = Session::new(small_config(6, 6, 1)).unwrap();
        for _ in 0..3 {
            session.advance_tick(&default_params()).unwrap();
        }
        assert_eq!(session.current_tick(), TickId(3));

        session.reset(99);
        assert_eq!(session.current_tick(), TickId(0));
        assert_eq!(session.seed(), 99);
        assert!(session.grid().as_slice().iter().all(|&v| v == 1.0));
        assert!(session.efficiency_over_time().is_empty());
        assert!(session.flow_rate_impact().is_empty());
        assert!(session.tank_area_impact().is_empty());

        // Session is usable after reset.
        let outcome = session.advance_tick(&default_params()).unwrap();
        assert_eq!(outcome.tick, TickId(1));
    }

    #[test]
    fn flow_sample_appended_reflects_dedup() {
        let mut session = Session::new(small_config(5, 5, 7)).unwrap();
        assert!(session.advance_tick(&params_with_flow(1.0)).unwrap().flow_sample_appended);
        assert!(!session.advance_tick(&params_with_flow(1.0)).unwrap().flow_sample_appended);
        assert!(session.advance_tick(&params_with_flow(2.0)).unwrap().flow_sample_appended);
        assert_eq!(session.flow_rate_impact().len(), 2);
    }

    #[test]
    fn sessions_are_isolated() {
        let mut a = Session::new(small_config(5, 5, 1)).unwrap();
        let mut b = Session::new(small_config(5, 5, 2)).unwrap();
        a.advance_tick(&default_params()).unwrap();
        assert_eq!(b.current_tick(), TickId(0));
        assert!(b.efficiency_over_time().is_empty());

        b.advance_tick(&default_params()).unwrap();
        // Different seeds, different grids.
        assert_ne!(a.grid().as_slice(), b.grid().as_slice());
    }

    proptest! {
        /// After N ticks the efficiency and area series hold exactly N
        /// samples and the flow series at most N, regardless of the
        /// flow sequence.
        #[test]
        fn series_counts_hold_for_any_flow_sequence(
            flows in prop::collection::vec(0.1f64..10.0, 1..32),
            seed in any::<u64>(),
        ) {
            let mut session = Session::new(small_config(4, 4, seed)).unwrap();
            for &flow in &flows {
                session.advance_tick(&params_with_flow(flow)).unwrap();
            }
            prop_assert_eq!(session.efficiency_over_time().len(), flows.len());
            prop_assert_eq!(session.tank_area_impact().len(), flows.len());
            prop_assert!(session.flow_rate_impact().len() <= flows.len());
            prop_assert!(!session.flow_rate_impact().is_empty());
        }
    }

    #[test]
    fn debug_impl_doesnt_panic() {
        let session = Session::new(small_config(4, 4, 0)).unwrap();
        let debug = format!("{session:?}");
        assert!(debug.contains("Session"));
        assert!(debug.contains("current_tick"));
    }
}
