//! Ballast: the core of an interactive ballast water exchange mixing
//! demonstrator.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all ballast sub-crates. For most users, adding `ballast` as a
//! single dependency is sufficient.
//!
//! A 2-D concentration field is perturbed each tick by flow-scaled
//! turbulence noise and decayed by an exchange-efficiency factor; three
//! derived series (efficiency over time, flow-rate impact, tank-area
//! impact) accumulate for display. No rendering happens here — the
//! presentation layer supplies parameters and reads the field and
//! series after each tick.
//!
//! # Quick start
//!
//! ```rust
//! use ballast::prelude::*;
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! let params = ExchangeParams {
//!     tank: TankGeometry { length_m: 50.0, width_m: 20.0, height_m: 10.0 },
//!     flow_rate_m3s: 1.0,
//!     efficiency_pct: 80.0,
//! };
//!
//! for _ in 0..10 {
//!     let outcome = session.advance_tick(&params).unwrap();
//!     assert!((0.0..=1.0).contains(&outcome.avg_concentration));
//! }
//!
//! assert_eq!(session.current_tick(), TickId(10));
//! assert_eq!(session.efficiency_over_time().len(), 10);
//! assert_eq!(session.tank_area_impact().len(), 10);
//! // Flow rate never changed, so the impact series kept one sample.
//! assert_eq!(session.flow_rate_impact().len(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ballast-core` | Grid, parameters, IDs, error types |
//! | [`mixing`] | `ballast-mixing` | Noise sources and the mixing update |
//! | [`metrics`] | `ballast-metrics` | Derived series and the recorder |
//! | [`engine`] | `ballast-engine` | Session config and the tick loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, parameters, and errors (`ballast-core`).
pub use ballast_core as types;

/// Noise sources and the mixing update (`ballast-mixing`).
pub use ballast_mixing as mixing;

/// Derived series and the metrics recorder (`ballast-metrics`).
pub use ballast_metrics as metrics;

/// Session configuration and the tick loop (`ballast-engine`).
pub use ballast_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use ballast::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ballast_core::{ConcentrationGrid, ExchangeParams, TankGeometry, TickId};

    // Errors
    pub use ballast_core::{GridError, MixingError, ParamError, StepError};

    // Mixing
    pub use ballast_mixing::{MixingUpdate, NoiseSource, UniformTurbulence};

    // Metrics
    pub use ballast_metrics::{
        EfficiencySample, EfficiencySeries, ExchangeRecorder, FlowRateSample, FlowRateSeries,
        RecordOutcome, TankAreaSample, TankAreaSeries,
    };

    // Engine
    pub use ballast_engine::{ConfigError, Session, SessionConfig, StepMetrics, TickOutcome};
}
