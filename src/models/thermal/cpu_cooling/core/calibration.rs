//! Tunable constants of the cooling model, gathered in one place.

use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature, Time},
    ratio::percent,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    hardware::Vendor,
    units::ThermalResistance,
};

use super::{
    CapacityDerating, DurabilityModel, FanCurve, HeatsinkModel, JunctionResistance, NoiseModel,
    PowerCoefficients, PowerLimitTiers,
};

/// Every calibration constant the engine reads.
///
/// The defaults reproduce the reference calibration. Each field can be
/// overridden to fit measurements of a particular machine.
///
/// # Example
///
/// ```
/// use cpu_cooling::models::thermal::cpu_cooling::{Calibration, HotspotOffset};
/// use cpu_cooling::support::{hardware::Vendor, units::ThermalResistance};
/// use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};
///
/// let calibration = Calibration {
///     contact: ThermalResistance::new(0.05).unwrap(),
///     hotspot: Some(HotspotOffset {
///         vendor: Vendor::Amd,
///         offset: TemperatureInterval::new::<kelvin>(8.0),
///     }),
///     ..Calibration::default()
/// };
/// assert!(calibration.hotspot.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub power: PowerCoefficients,
    pub power_limits: PowerLimitTiers,
    pub junction: JunctionResistance,

    /// Case-to-heatsink resistance of the thermal interface.
    pub contact: ThermalResistance,

    pub heatsink: HeatsinkModel,
    pub fan: FanCurve,
    pub capacity: CapacityDerating,
    pub noise: NoiseModel,
    pub durability: DurabilityModel,
    pub warmup: WarmupPhase,

    /// Steady temperature at or above which throttling is likely.
    pub throttle_threshold: ThermodynamicTemperature,

    /// Optional vendor-specific offset added to reported temperatures.
    ///
    /// The magnitude of this correction is not validated against measurements,
    /// so it is off unless set explicitly.
    pub hotspot: Option<HotspotOffset>,

    /// Share of a cooler's rated capacity treated as its nominal capacity.
    pub nominal_capacity_fraction: Constrained<Ratio, UnitInterval>,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            power: PowerCoefficients::default(),
            power_limits: PowerLimitTiers::default(),
            junction: JunctionResistance::default(),
            contact: ThermalResistance::from_trusted(0.08),
            heatsink: HeatsinkModel::default(),
            fan: FanCurve::default(),
            capacity: CapacityDerating::default(),
            noise: NoiseModel::default(),
            durability: DurabilityModel::default(),
            warmup: WarmupPhase::default(),
            throttle_threshold: ThermodynamicTemperature::new::<degree_celsius>(95.0),
            hotspot: None,
            nominal_capacity_fraction: Constrained::new_unchecked(Ratio::new::<percent>(95.0)),
        }
    }
}

impl Calibration {
    /// Offset applied to temperatures reported for a CPU from `vendor`.
    #[must_use]
    pub fn hotspot_offset(&self, vendor: Vendor) -> TemperatureInterval {
        match self.hotspot {
            Some(hotspot) if hotspot.vendor == vendor => hotspot.offset,
            _ => TemperatureInterval::new::<delta_kelvin>(0.0),
        }
    }
}

/// Light load drawn at the start of a transient run, before the requested load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmupPhase {
    pub end: Time,
    pub workload: Ratio,
    pub profile_factor: f64,
}

impl Default for WarmupPhase {
    fn default() -> Self {
        Self {
            end: Time::new::<second>(5.0),
            workload: Ratio::new::<percent>(10.0),
            profile_factor: 0.5,
        }
    }
}

/// Fixed temperature offset for CPUs of one vendor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotOffset {
    pub vendor: Vendor,
    pub offset: TemperatureInterval,
}
