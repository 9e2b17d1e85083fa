//! Derived time series and metrics recording for the ballast water
//! exchange simulator.
//!
//! Three series accumulate per-tick summaries of the concentration grid:
//! average concentration over time, flow-rate impact (de-duplicated
//! against the immediately preceding entry), and tank-area impact
//! (appended unconditionally). The presentation layer reads them after
//! each tick and must never mutate them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod recorder;
pub mod series;

pub use recorder::{ExchangeRecorder, RecordOutcome};
pub use series::{
    EfficiencySample, EfficiencySeries, FlowRateSample, FlowRateSeries, TankAreaSample,
    TankAreaSeries,
};
