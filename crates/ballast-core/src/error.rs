//! Error types for the ballast water exchange simulator.
//!
//! Organized by subsystem: parameter validation, grid access, the mixing
//! update, and the per-tick step that composes them.

use std::error::Error;
use std::fmt;

/// Errors from [`ExchangeParams`](crate::params::ExchangeParams) validation.
///
/// Parameters are supplied by the presentation layer each tick; a failed
/// validation rejects the whole tick before any state is mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// A tank dimension is zero or negative.
    NonPositiveDimension {
        /// Name of the offending dimension (`"length_m"`, `"width_m"`, `"height_m"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The flow rate is zero or negative.
    NonPositiveFlowRate {
        /// The rejected value.
        value: f64,
    },
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "tank {name} must be positive, got {value}")
            }
            Self::NonPositiveFlowRate { value } => {
                write!(f, "flow rate must be positive, got {value}")
            }
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl Error for ParamError {}

/// Errors from [`ConcentrationGrid`](crate::grid::ConcentrationGrid)
/// construction and access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero cells; the mean is undefined.
    EmptyGrid,
    /// Requested cell count exceeds `u32::MAX`.
    CellCountOverflow {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has zero cells"),
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "cell count {rows}x{cols} exceeds u32::MAX")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from the mixing update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MixingError {
    /// Noise buffer length does not match the grid cell count.
    ///
    /// This is a precondition violation; the grid is left untouched.
    ShapeMismatch {
        /// Cell count of the grid being updated.
        grid_cells: usize,
        /// Length of the supplied noise buffer.
        noise_cells: usize,
    },
}

impl fmt::Display for MixingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                grid_cells,
                noise_cells,
            } => {
                write!(
                    f,
                    "noise buffer length ({noise_cells}) != grid cell count ({grid_cells})"
                )
            }
        }
    }
}

impl Error for MixingError {}

/// Errors from a single `advance_tick` call.
///
/// A failed tick leaves the session observably unchanged: parameters are
/// validated before any mutation, and the mixing update checks its
/// preconditions before touching the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The supplied parameters failed validation; the tick was rejected.
    InvalidParams(ParamError),
    /// The mixing update failed.
    MixingFailed(MixingError),
    /// Recording the derived metrics failed.
    RecordFailed(GridError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams(e) => write!(f, "invalid parameters: {e}"),
            Self::MixingFailed(e) => write!(f, "mixing update failed: {e}"),
            Self::RecordFailed(e) => write!(f, "metrics recording failed: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParams(e) => Some(e),
            Self::MixingFailed(e) => Some(e),
            Self::RecordFailed(e) => Some(e),
        }
    }
}

impl From<ParamError> for StepError {
    fn from(e: ParamError) -> Self {
        Self::InvalidParams(e)
    }
}

impl From<MixingError> for StepError {
    fn from(e: MixingError) -> Self {
        Self::MixingFailed(e)
    }
}
