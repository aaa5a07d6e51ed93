//! Steady-state and transient temperature of a lumped thermal mass.

mod profile;
mod transient;

pub use profile::{Burst, BurstProfile, PowerProfile};
pub use transient::{Integrator, Transient, TransientConfig, TransientPoint, TransientSeries};

use uom::si::f64::{HeatCapacity, Power, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::ThermalResistance,
};

/// Equilibrium temperature: `ambient + power × resistance`.
#[must_use]
pub fn steady_temperature(
    power: Power,
    ambient: ThermodynamicTemperature,
    resistance: ThermalResistance,
) -> ThermodynamicTemperature {
    ambient + resistance.temperature_rise(power)
}

/// Integrates the temperature response to `profile`, starting at ambient.
///
/// Solves `C dT/dt = P(t) − (T − ambient) / R` at a fixed step. The returned
/// series has one point per step from `t = 0` through the configured duration.
///
/// With [`Integrator::ForwardEuler`] the step must stay well below the
/// thermal time constant `R × C`; at or above `2 R C` the integration
/// oscillates and diverges. [`Integrator::ExactExponential`] has no such limit.
#[must_use]
pub fn simulate<P: PowerProfile>(
    profile: &P,
    resistance: ThermalResistance,
    thermal_mass: Constrained<HeatCapacity, StrictlyPositive>,
    ambient: ThermodynamicTemperature,
    config: &TransientConfig,
) -> TransientSeries {
    Transient::new(profile, resistance, thermal_mass, ambient, config).collect()
}
