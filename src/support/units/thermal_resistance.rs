use std::ops::{Add, Mul};

use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Thermal resistance in kelvin (or °C) per watt.
///
/// The value must be non-negative. Resistances in series add.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ThermalResistance(Constrained<f64, NonNegative>);

impl ThermalResistance {
    /// Creates a resistance from a value in K/W.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or NaN.
    pub fn new(kelvin_per_watt: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(kelvin_per_watt)?))
    }

    /// Creates a resistance from a value the caller knows is non-negative.
    pub(crate) fn from_trusted(kelvin_per_watt: f64) -> Self {
        debug_assert!(kelvin_per_watt >= 0.0, "thermal resistance must be >= 0");
        Self(Constrained::new_unchecked(kelvin_per_watt))
    }

    /// Returns the resistance in K/W.
    #[must_use]
    pub fn kelvin_per_watt(&self) -> f64 {
        *self.0.as_ref()
    }

    /// Temperature rise across this resistance when `power` flows through it.
    #[must_use]
    pub fn temperature_rise(&self, power: Power) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(power.get::<watt>() * self.kelvin_per_watt())
    }
}

impl Add for ThermalResistance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for ThermalResistance {
    type Output = Self;

    /// Scales the resistance by a non-negative factor.
    fn mul(self, factor: f64) -> Self {
        Self::from_trusted(self.kelvin_per_watt() * factor.max(0.0))
    }
}
