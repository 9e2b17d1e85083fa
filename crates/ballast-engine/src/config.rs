//! Session configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use ballast_core::GridError;

/// Errors detected during [`SessionConfig::validate()`] or session
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid has zero cells.
    EmptyGrid {
        /// Configured row count.
        rows: u32,
        /// Configured column count.
        cols: u32,
    },
    /// Noise amplitude is NaN, infinite, or negative.
    InvalidAmplitude {
        /// The invalid value.
        value: f64,
    },
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid {rows}x{cols} has zero cells")
            }
            Self::InvalidAmplitude { value } => {
                write!(f, "noise amplitude must be finite and >= 0, got {value}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Configuration for constructing a [`Session`](crate::session::Session).
///
/// The defaults reproduce the interactive demonstrator: a 100x100 grid and
/// turbulence draws in `[-0.05, 0.05]`.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Grid rows. Default: 100.
    pub rows: u32,
    /// Grid columns. Default: 100.
    pub cols: u32,
    /// Turbulence noise amplitude. Default: 0.05.
    pub noise_amplitude: f64,
    /// RNG seed for the turbulence source. Default: 0.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            noise_amplitude: 0.05,
            seed: 0,
        }
    }
}

impl SessionConfig {
    /// Check structural invariants before session construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] for a zero dimension and
    /// [`ConfigError::InvalidAmplitude`] for a negative or non-finite
    /// amplitude. Cell-count overflow surfaces as [`ConfigError::Grid`]
    /// during construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(ConfigError::InvalidAmplitude {
                value: self.noise_amplitude,
            });
        }
        Ok(())
    }
}
