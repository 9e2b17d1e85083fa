//! The Metrics Recorder: one mean computation fanned out to three series.

use ballast_core::{ConcentrationGrid, GridError, TickId};

use crate::series::{
    EfficiencySample, EfficiencySeries, FlowRateSeries, TankAreaSample, TankAreaSeries,
};

/// What [`ExchangeRecorder::record`] did for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordOutcome {
    /// The grid-wide average concentration recorded this tick.
    ///
    /// Computed once; the identical `f64` is stored in every series
    /// touched this tick.
    pub avg_concentration: f64,
    /// Whether a flow-rate sample was appended (false when the flow rate
    /// matched the previous entry exactly).
    pub flow_sample_appended: bool,
}

/// Accumulates the three derived series across a session.
///
/// Always invoked after the mixing update, so it only ever observes the
/// post-update grid.
#[derive(Clone, Debug, Default)]
pub struct ExchangeRecorder {
    efficiency: EfficiencySeries,
    flow: FlowRateSeries,
    area: TankAreaSeries,
}

impl ExchangeRecorder {
    /// Create a recorder with all three series empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tick's samples from the post-update grid.
    ///
    /// Computes the grid mean exactly once and appends:
    /// - `(tick, avg)` to the efficiency series, unconditionally;
    /// - `(flow_rate, avg)` to the flow-rate series, only when the flow
    ///   rate differs from the last entry's (exact `f64` inequality);
    /// - `(area, avg)` to the tank-area series, unconditionally.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError::EmptyGrid`] if the grid has zero cells;
    /// nothing is appended in that case.
    pub fn record(
        &mut self,
        grid: &ConcentrationGrid,
        tick: TickId,
        flow_rate_m3s: f64,
        area_m2: f64,
    ) -> Result<RecordOutcome, GridError> {
        let avg_concentration = grid.mean()?;
        self.efficiency.push(EfficiencySample {
            tick,
            avg_concentration,
        });
        let flow_sample_appended = self.flow.push_if_changed(flow_rate_m3s, avg_concentration);
        self.area.push(TankAreaSample {
            area_m2,
            avg_concentration,
        });
        Ok(RecordOutcome {
            avg_concentration,
            flow_sample_appended,
        })
    }

    /// Average concentration per tick.
    pub fn efficiency_over_time(&self) -> &EfficiencySeries {
        &self.efficiency
    }

    /// Flow-rate impact series (adjacent-duplicate suppressed).
    pub fn flow_rate_impact(&self) -> &FlowRateSeries {
        &self.flow
    }

    /// Tank-area impact series.
    pub fn tank_area_impact(&self) -> &TankAreaSeries {
        &self.area
    }

    /// Drop all recorded samples (session reset).
    pub fn clear(&mut self) {
        self.efficiency.clear();
        self.flow.clear();
        self.area.clear();
    }
}
