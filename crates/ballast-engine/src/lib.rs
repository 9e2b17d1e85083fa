//! Session state and tick loop for the ballast water exchange simulator.
//!
//! [`Session`] owns the concentration grid, the tick counter, and the
//! three derived series for one continuous run. An external scheduler
//! calls [`advance_tick`](Session::advance_tick) at whatever cadence the
//! host environment requires; the core itself is cadence-agnostic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use metrics::StepMetrics;
pub use session::{Session, TickOutcome};
