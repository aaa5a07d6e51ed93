use uom::si::{
    f64::{AngularVelocity, Power, Ratio, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

use crate::support::units::ThermalResistance;

use super::{EffectiveCapacity, PowerLimits, ResistanceChain, TransientSeries};

/// Outcome of one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub power: PowerEstimate,
    pub thermal: ThermalState,
    pub temperature: TemperatureResult,
    pub metrics: DerivedMetrics,
    pub risk: Risk,
}

/// Modeled CPU power before and after power limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEstimate {
    /// Power the workload would draw without limits.
    pub modeled: Power,

    /// Power after clamping to PL1 or PL2.
    pub applied: Power,

    pub limits: PowerLimits,
}

/// Cooler operating point at the applied power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalState {
    pub resistance: ResistanceChain,

    /// Sum of the resistance chain.
    pub total_resistance: ThermalResistance,

    pub fan_speed: AngularVelocity,
    pub capacity: EffectiveCapacity,

    /// Applied power over effective capacity; above 100 % the cooler is undersized.
    pub utilization: Ratio,
}

/// Reported temperatures.
///
/// `steady_state` includes the calibration's hotspot offset, if any. The
/// transient series does not: it starts at ambient and approaches
/// [`TemperatureResult::case_steady_state`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureResult {
    /// Equilibrium temperature at the applied power, plus `hotspot_offset`.
    pub steady_state: ThermodynamicTemperature,

    /// Vendor hotspot offset added to `steady_state`; zero when none applies.
    pub hotspot_offset: TemperatureInterval,

    /// Time series from ambient, present when a transient run was requested.
    pub transient: Option<TransientSeries>,
}

impl TemperatureResult {
    /// Equilibrium temperature without the hotspot offset.
    #[must_use]
    pub fn case_steady_state(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.steady_state.get::<abs_kelvin>() - self.hotspot_offset.get::<delta_kelvin>(),
        )
    }

    /// The transient series with the hotspot offset applied to every point.
    #[must_use]
    pub fn hotspot_transient(&self) -> Option<TransientSeries> {
        self.transient
            .clone()
            .map(|series| series.shifted(self.hotspot_offset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// Estimated cooler noise in dB(A).
    pub noise_dba: f64,

    /// Estimated cooler lifetime in whole years.
    pub lifetime_years: u32,
}

/// Warnings raised by a simulation.
///
/// Neither condition is an error: the simulation still produces finite
/// results, but they describe a machine that is likely to misbehave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Risk {
    /// Utilization exceeds 100 % of the effective capacity.
    pub cooler_insufficient: bool,

    /// Steady temperature reaches the throttle threshold.
    pub throttling: bool,
}

impl Risk {
    #[must_use]
    pub fn any(&self) -> bool {
        self.cooler_insufficient || self.throttling
    }
}
