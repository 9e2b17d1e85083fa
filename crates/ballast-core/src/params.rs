//! Simulation parameters supplied by the presentation layer each tick.

use crate::error::ParamError;

/// Tank dimensions in meters.
///
/// Height is carried for completeness (the presentation layer exposes a
/// slider for it) but does not enter the mixing math; only the
/// length-times-width area feeds the derived series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TankGeometry {
    /// Tank length in meters. Must be positive and finite.
    pub length_m: f64,
    /// Tank width in meters. Must be positive and finite.
    pub width_m: f64,
    /// Tank height in meters. Must be positive and finite. Unused by the math.
    pub height_m: f64,
}

impl TankGeometry {
    /// Horizontal tank area, `length * width`, in square meters.
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// Per-tick exchange operation parameters.
///
/// Read-only to the core. Efficiency is deliberately not range-checked:
/// out-of-range values (e.g. 150%) produce mathematically defined output
/// that the unit clamp neutralizes. It must still be finite so the clamp
/// invariant holds (a NaN would survive clamping).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExchangeParams {
    /// Tank dimensions.
    pub tank: TankGeometry,
    /// Pump flow rate in cubic meters per second. Must be positive and finite.
    pub flow_rate_m3s: f64,
    /// Exchange efficiency as a percentage, nominally in `[0, 100]`.
    pub efficiency_pct: f64,
}

impl ExchangeParams {
    /// Validate the parameters for one tick.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if any tank dimension or the flow rate is
    /// non-positive or non-finite, or if the efficiency is non-finite.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_positive("length_m", self.tank.length_m)?;
        check_positive("width_m", self.tank.width_m)?;
        check_positive("height_m", self.tank.height_m)?;
        if !self.flow_rate_m3s.is_finite() {
            return Err(ParamError::NonFinite {
                name: "flow_rate_m3s",
                value: self.flow_rate_m3s,
            });
        }
        if self.flow_rate_m3s <= 0.0 {
            return Err(ParamError::NonPositiveFlowRate {
                value: self.flow_rate_m3s,
            });
        }
        if !self.efficiency_pct.is_finite() {
            return Err(ParamError::NonFinite {
                name: "efficiency_pct",
                value: self.efficiency_pct,
            });
        }
        Ok(())
    }

    /// The per-tick global decay factor, `1 - efficiency / 100`.
    pub fn decay_factor(&self) -> f64 {
        1.0 - self.efficiency_pct / 100.0
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ParamError::NonPositiveDimension { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ExchangeParams {
        ExchangeParams {
            tank: TankGeometry {
                length_m: 50.0,
                width_m: 20.0,
                height_m: 10.0,
            },
            flow_rate_m3s: 1.0,
            efficiency_pct: 80.0,
        }
    }

    #[test]
    fn valid_params_pass() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn area_is_length_times_width() {
        assert_eq!(valid().tank.area_m2(), 1000.0);
    }

    fn expect_non_positive(params: ExchangeParams, field: &str) {
        match params.validate() {
            Err(ParamError::NonPositiveDimension { name, .. }) => assert_eq!(name, field),
            other => panic!("expected NonPositiveDimension for {field}, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut params = valid();
        params.tank.length_m = 0.0;
        expect_non_positive(params, "length_m");

        let mut params = valid();
        params.tank.width_m = -3.0;
        expect_non_positive(params, "width_m");

        let mut params = valid();
        params.tank.height_m = 0.0;
        expect_non_positive(params, "height_m");
    }

    #[test]
    fn rejects_non_positive_flow_rate() {
        let mut params = valid();
        params.flow_rate_m3s = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ParamError::NonPositiveFlowRate { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut params = valid();
        params.tank.length_m = f64::NAN;
        assert!(matches!(params.validate(), Err(ParamError::NonFinite { .. })));

        let mut params = valid();
        params.efficiency_pct = f64::INFINITY;
        assert!(matches!(params.validate(), Err(ParamError::NonFinite { .. })));
    }

    #[test]
    fn out_of_range_efficiency_is_accepted() {
        // 150% is semantically meaningless but mathematically defined;
        // the unit clamp neutralizes it downstream.
        let mut params = valid();
        params.efficiency_pct = 150.0;
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.decay_factor(), -0.5);
    }

    #[test]
    fn decay_factor_endpoints() {
        let mut params = valid();
        params.efficiency_pct = 0.0;
        assert_eq!(params.decay_factor(), 1.0);
        params.efficiency_pct = 100.0;
        assert_eq!(params.decay_factor(), 0.0);
    }
}
