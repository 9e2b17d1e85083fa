//! The three derived time series and their sample types.
//!
//! All series are append-only, never reordered or pruned, and expose an
//! explicit [`latest`](EfficiencySeries::latest) /
//! [`is_empty`](EfficiencySeries::is_empty) so collaborators never fail
//! unpacking a series before the first tick has run.

use ballast_core::TickId;

/// One point of the efficiency-over-time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EfficiencySample {
    /// The tick this sample was recorded at.
    pub tick: TickId,
    /// Grid-wide average concentration after the tick's update.
    pub avg_concentration: f64,
}

/// One point of the flow-rate impact series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowRateSample {
    /// Flow rate in effect when the sample was recorded, in m³/s.
    pub flow_rate_m3s: f64,
    /// Grid-wide average concentration after the tick's update.
    pub avg_concentration: f64,
}

/// One point of the tank-area impact series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TankAreaSample {
    /// Tank area (`length * width`) in square meters.
    pub area_m2: f64,
    /// Grid-wide average concentration after the tick's update.
    pub avg_concentration: f64,
}

/// Average concentration over time; one sample appended per tick.
#[derive(Clone, Debug, Default)]
pub struct EfficiencySeries {
    samples: Vec<EfficiencySample>,
}

impl EfficiencySeries {
    pub(crate) fn push(&mut self, sample: EfficiencySample) {
        self.samples.push(sample);
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples recorded so far.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` before the first tick has recorded anything.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently appended sample, if any.
    pub fn latest(&self) -> Option<&EfficiencySample> {
        self.samples.last()
    }

    /// All samples in append order.
    pub fn samples(&self) -> &[EfficiencySample] {
        &self.samples
    }
}

/// Flow-rate impact on average concentration.
///
/// Invariant: consecutive entries never share the same flow rate. A new
/// sample is appended only when the incoming flow rate differs from the
/// last recorded one under exact `f64` inequality. The comparison is
/// adjacent-only: a flow rate returning to a previously seen value after
/// changing away is re-appended. Holding the flow rate constant
/// deliberately under-samples this series.
#[derive(Clone, Debug, Default)]
pub struct FlowRateSeries {
    samples: Vec<FlowRateSample>,
}

impl FlowRateSeries {
    /// Append unless the last entry has the identical flow rate.
    /// Returns whether a sample was appended.
    pub(crate) fn push_if_changed(&mut self, flow_rate_m3s: f64, avg_concentration: f64) -> bool {
        // Exact floating-point equality is the de-dup key by design.
        let changed = self
            .samples
            .last()
            .is_none_or(|last| last.flow_rate_m3s != flow_rate_m3s);
        if changed {
            self.samples.push(FlowRateSample {
                flow_rate_m3s,
                avg_concentration,
            });
        }
        changed
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples recorded so far.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` before the first tick has recorded anything.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently appended sample, if any.
    pub fn latest(&self) -> Option<&FlowRateSample> {
        self.samples.last()
    }

    /// All samples in append order.
    pub fn samples(&self) -> &[FlowRateSample] {
        &self.samples
    }
}

/// Tank-area impact on average concentration; appended unconditionally
/// every tick, even when the area is unchanged (unlike [`FlowRateSeries`]).
#[derive(Clone, Debug, Default)]
pub struct TankAreaSeries {
    samples: Vec<TankAreaSample>,
}

impl TankAreaSeries {
    pub(crate) fn push(&mut self, sample: TankAreaSample) {
        self.samples.push(sample);
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples recorded so far.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` before the first tick has recorded anything.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently appended sample, if any.
    pub fn latest(&self) -> Option<&TankAreaSample> {
        self.samples.last()
    }

    /// All samples in append order.
    pub fn samples(&self) -> &[TankAreaSample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_series_expose_safe_accessors() {
        let series = EfficiencySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.latest().is_none());
        assert!(series.samples().is_empty());
    }

    #[test]
    fn flow_series_dedups_adjacent_only() {
        let mut series = FlowRateSeries::default();
        assert!(series.push_if_changed(1.0, 0.9));
        assert!(!series.push_if_changed(1.0, 0.8));
        assert!(series.push_if_changed(2.0, 0.7));
        // Returning to a previously seen value IS re-appended.
        assert!(series.push_if_changed(1.0, 0.6));
        assert_eq!(series.len(), 3);
        assert_eq!(series.latest().unwrap().flow_rate_m3s, 1.0);
        assert_eq!(series.latest().unwrap().avg_concentration, 0.6);
    }

    #[test]
    fn flow_series_first_push_always_appends() {
        let mut series = FlowRateSeries::default();
        assert!(series.push_if_changed(0.0, 1.0));
        assert_eq!(series.len(), 1);
    }

    proptest! {
        /// Consecutive entries never share a flow rate, and every
        /// adjacent change in the input produces exactly one append.
        #[test]
        fn no_adjacent_duplicates(flows in prop::collection::vec(0u8..4, 1..64)) {
            let mut series = FlowRateSeries::default();
            for &f in &flows {
                series.push_if_changed(f as f64, 0.5);
            }
            let samples = series.samples();
            for pair in samples.windows(2) {
                prop_assert_ne!(pair[0].flow_rate_m3s, pair[1].flow_rate_m3s);
            }
            let mut expected = 1usize;
            for pair in flows.windows(2) {
                if pair[0] != pair[1] {
                    expected += 1;
                }
            }
            prop_assert_eq!(samples.len(), expected);
        }
    }
}
