//! Heuristic CPU cooling engine.
//!
//! The engine turns a CPU, a cooler, and operating conditions into a power
//! estimate, a thermal resistance chain, a steady temperature, an optional
//! transient response, and derived noise and lifetime estimates. Every step
//! is a pure function of its inputs and the [`Calibration`].

mod auxiliary;
mod calibration;
mod capacity;
mod fan_curve;
mod headroom;
mod input;
mod power;
mod power_limits;
mod resistance;
mod results;
mod simulation;
mod solver;

#[cfg(test)]
pub(crate) mod test_support;

pub use auxiliary::{DurabilityModel, NoiseModel, estimate_lifetime, estimate_noise};
pub use calibration::{Calibration, HotspotOffset, WarmupPhase};
pub use capacity::{
    CapacityDerating, EffectiveCapacity, UNRATED_UTILIZATION_PERCENT, effective_capacity,
    utilization,
};
pub use fan_curve::{FanCurve, StoppedFanPolicy};
pub use headroom::{Headroom, HeadroomConfig, HeadroomError, HeadroomPoint, throttle_headroom};
pub use input::{Ambient, InputError, SimulationParams, Ventilation, WorkloadProfile};
pub use power::{PowerCoefficients, estimate_power};
pub use power_limits::{
    PowerLimitMultipliers, PowerLimitTier, PowerLimitTiers, PowerLimits, derive_power_limits,
};
pub use resistance::{
    HeatsinkModel, HeatsinkTiers, JunctionResistance, RadiatorResistance,
    RatedCapacityResistance, ResistanceChain, ResistancePolicy, derive_resistance,
};
pub use results::{
    DerivedMetrics, PowerEstimate, Risk, SimulationResult, TemperatureResult, ThermalState,
};
pub use simulation::run_simulation;
pub use solver::{
    Burst, BurstProfile, Integrator, PowerProfile, Transient, TransientConfig, TransientPoint,
    TransientSeries, simulate, steady_temperature,
};
