//! Core types for the ballast water exchange simulator.
//!
//! This is the leaf crate with zero external dependencies. It defines
//! the concentration grid, simulation parameters, the tick counter, and
//! the error types shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod params;

pub use error::{GridError, MixingError, ParamError, StepError};
pub use grid::ConcentrationGrid;
pub use id::TickId;
pub use params::{ExchangeParams, TankGeometry};
