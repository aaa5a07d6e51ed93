//! Junction-to-ambient thermal resistance chain.
//!
//! The chain has three resistances in series:
//!
//! 1. junction: die to heat spreader, set by CPU era, vendor, and die stacking
//! 2. contact: heat spreader to cooler base through the thermal paste
//! 3. heatsink: cooler to ambient air, set by cooler kind and size and
//!    corrected for fan speed
//!
//! Every step is a categorical policy lookup, not a physical model, and every
//! table is part of the [`Calibration`](super::Calibration).

use uom::si::{
    f64::{AngularVelocity, Power},
    power::watt,
};

use crate::support::{
    hardware::{AirTier, CoolerKind, CoolerSpec, CpuSpec, DieStack, Vendor},
    units::ThermalResistance,
};

use super::FanCurve;

/// Junction-to-case resistance policy.
///
/// The base value depends on the CPU's release era: older process nodes
/// conduct heat to the spreader less well. Vendor and die stacking add a
/// fixed offset on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JunctionResistance {
    /// CPUs released before `mid_from_year`.
    pub old: ThermalResistance,
    pub mid: ThermalResistance,
    pub new: ThermalResistance,
    pub mid_from_year: u16,
    pub new_from_year: u16,

    pub amd_offset: ThermalResistance,
    pub intel_offset: ThermalResistance,

    /// Extra resistance for stacked-cache dies.
    pub stacked_cache_offset: ThermalResistance,
}

impl Default for JunctionResistance {
    fn default() -> Self {
        Self {
            old: ThermalResistance::from_trusted(0.6),
            mid: ThermalResistance::from_trusted(0.3),
            new: ThermalResistance::from_trusted(0.18),
            mid_from_year: 2012,
            new_from_year: 2019,
            amd_offset: ThermalResistance::from_trusted(0.04),
            intel_offset: ThermalResistance::from_trusted(0.0),
            stacked_cache_offset: ThermalResistance::from_trusted(0.06),
        }
    }
}

impl JunctionResistance {
    /// Returns the junction-to-case resistance of a CPU.
    #[must_use]
    pub fn resistance(&self, cpu: &CpuSpec) -> ThermalResistance {
        let era = if cpu.release_year >= self.new_from_year {
            self.new
        } else if cpu.release_year >= self.mid_from_year {
            self.mid
        } else {
            self.old
        };

        let vendor = match cpu.vendor {
            Vendor::Amd => self.amd_offset,
            Vendor::Intel => self.intel_offset,
        };

        let stack = match cpu.die_stack {
            DieStack::StackedCache => self.stacked_cache_offset,
            DieStack::Planar => ThermalResistance::from_trusted(0.0),
        };

        era + vendor + stack
    }
}

/// Heatsink resistance of a liquid cooler with a radiator at least
/// `min_radiator_mm` long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiatorResistance {
    pub min_radiator_mm: u16,
    pub resistance: ThermalResistance,
}

/// Heatsink resistance looked up by cooler kind and size.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatsinkTiers {
    pub air_budget: ThermalResistance,
    pub air_mainstream: ThermalResistance,
    pub air_premium: ThermalResistance,

    /// Radiator size classes. The largest class that fits applies.
    pub radiators: Vec<RadiatorResistance>,

    /// Radiators smaller than every class.
    pub small_radiator: ThermalResistance,
}

impl Default for HeatsinkTiers {
    fn default() -> Self {
        let radiator = |min_radiator_mm, r| RadiatorResistance {
            min_radiator_mm,
            resistance: ThermalResistance::from_trusted(r),
        };

        Self {
            air_budget: ThermalResistance::from_trusted(0.25),
            air_mainstream: ThermalResistance::from_trusted(0.18),
            air_premium: ThermalResistance::from_trusted(0.12),
            radiators: vec![radiator(240, 0.12), radiator(280, 0.10), radiator(360, 0.08)],
            small_radiator: ThermalResistance::from_trusted(0.20),
        }
    }
}

impl HeatsinkTiers {
    fn resistance(&self, kind: CoolerKind) -> ThermalResistance {
        match kind {
            CoolerKind::Air(AirTier::Budget) => self.air_budget,
            CoolerKind::Air(AirTier::Mainstream) => self.air_mainstream,
            CoolerKind::Air(AirTier::Premium) => self.air_premium,
            CoolerKind::LiquidAio { radiator_mm } => self
                .radiators
                .iter()
                .filter(|class| class.min_radiator_mm <= radiator_mm)
                .max_by_key(|class| class.min_radiator_mm)
                .map_or(self.small_radiator, |class| class.resistance),
        }
    }
}

/// Heatsink resistance inversely proportional to the cooler's nominal
/// capacity: `max(floor, coefficient / nominal)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedCapacityResistance {
    /// Kelvin; divided by the nominal capacity in watts.
    pub coefficient: f64,
    pub floor: ThermalResistance,

    /// Used when the cooler has no nominal capacity.
    pub unrated: ThermalResistance,
}

impl Default for RatedCapacityResistance {
    fn default() -> Self {
        Self {
            coefficient: 28.0,
            floor: ThermalResistance::from_trusted(0.02),
            unrated: ThermalResistance::from_trusted(10.0),
        }
    }
}

impl RatedCapacityResistance {
    fn resistance(&self, nominal: Power) -> ThermalResistance {
        let nominal = nominal.get::<watt>();
        if nominal <= 0.0 {
            return self.unrated;
        }
        let r = (self.coefficient / nominal).max(self.floor.kelvin_per_watt());
        ThermalResistance::from_trusted(r.max(0.0))
    }
}

/// How the heatsink resistance of a cooler is obtained, before fan correction.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatsinkModel {
    Tiered(HeatsinkTiers),
    RatedCapacity(RatedCapacityResistance),
}

impl Default for HeatsinkModel {
    fn default() -> Self {
        Self::Tiered(HeatsinkTiers::default())
    }
}

impl HeatsinkModel {
    /// Returns the heatsink resistance at the fan curve's reference speed.
    #[must_use]
    pub fn nominal_resistance(&self, cooler: &CoolerSpec) -> ThermalResistance {
        match self {
            Self::Tiered(tiers) => tiers.resistance(cooler.kind()),
            Self::RatedCapacity(rated) => rated.resistance(cooler.nominal_capacity()),
        }
    }
}

/// Resistances along the path from die to ambient air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceChain {
    pub junction: ThermalResistance,
    pub contact: ThermalResistance,

    /// Heatsink resistance after fan-speed correction.
    pub heatsink: ThermalResistance,
}

impl ResistanceChain {
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.junction + self.contact + self.heatsink
    }
}

/// Resistance-related pieces of the calibration.
#[derive(Debug, Clone, Copy)]
pub struct ResistancePolicy<'a> {
    pub junction: &'a JunctionResistance,
    pub contact: ThermalResistance,
    pub heatsink: &'a HeatsinkModel,
    pub fan: &'a FanCurve,
}

/// Derives the resistance chain for a CPU and cooler with the fan at `fan_speed`.
#[must_use]
pub fn derive_resistance(
    cpu: &CpuSpec,
    cooler: &CoolerSpec,
    fan_speed: AngularVelocity,
    policy: ResistancePolicy<'_>,
) -> ResistanceChain {
    let heatsink =
        policy.heatsink.nominal_resistance(cooler) * policy.fan.resistance_factor(fan_speed);

    ResistanceChain {
        junction: policy.junction.resistance(cpu),
        contact: policy.contact,
        heatsink,
    }
}
