use uom::si::{
    f64::{HeatCapacity, Ratio, ThermodynamicTemperature},
    heat_capacity::joule_per_kelvin,
    ratio::percent,
};

use crate::{
    models::thermal::cpu_cooling::core::TransientConfig,
    support::constraint::{Constrained, StrictlyPositive, UnitInterval},
};

use super::{Ambient, InputError, Ventilation, WorkloadProfile};

/// Operating conditions of one simulation.
///
/// Every field is validated by its type, so a `SimulationParams` value is
/// always safe to simulate. [`SimulationParams::new`] fills in defaults for
/// everything but the ambient temperature and the workload:
///
/// - sustained-benchmark profile at nominal frequency
/// - PL2 bursts allowed
/// - a well-ventilated case with a 10 % capacity safety margin
/// - a 350 J/K thermal mass
/// - a 180 s transient run at 1 s steps
///
/// # Example
///
/// ```
/// use cpu_cooling::models::thermal::cpu_cooling::{SimulationParams, Ventilation, WorkloadProfile};
/// use uom::si::{
///     f64::{Ratio, ThermodynamicTemperature},
///     ratio::percent,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let params = SimulationParams::new(
///     ThermodynamicTemperature::new::<degree_celsius>(28.0),
///     Ratio::new::<percent>(100.0),
/// )
/// .unwrap()
/// .with_profile(WorkloadProfile::Gaming)
/// .with_ventilation(Ventilation::Poor)
/// .without_transient();
///
/// assert!(params.transient.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub ambient: Ambient,

    /// Requested load as a share of TDP-equivalent load; may exceed 100 %.
    pub workload: Constrained<Ratio, StrictlyPositive>,

    pub profile: WorkloadProfile,

    /// Clock relative to nominal (1.0 is stock).
    pub freq_scale: Constrained<f64, StrictlyPositive>,

    /// Whether the CPU may draw up to PL2 instead of PL1.
    pub allow_burst: bool,

    pub ventilation: Ventilation,

    /// Fixed derating of the cooler's nominal capacity.
    pub safety: Constrained<Ratio, UnitInterval>,

    /// Lumped heat capacity of die, spreader, and heatsink.
    pub thermal_mass: Constrained<HeatCapacity, StrictlyPositive>,

    /// Transient run to perform, if any.
    pub transient: Option<TransientConfig>,
}

impl SimulationParams {
    /// Creates parameters for the given ambient temperature and workload.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the ambient temperature is out of range or
    /// the workload is not strictly positive.
    pub fn new(
        ambient: ThermodynamicTemperature,
        workload: Ratio,
    ) -> Result<Self, InputError> {
        Ok(Self {
            ambient: Ambient::new(ambient)?,
            workload: StrictlyPositive::new(workload).map_err(InputError::constraint("workload"))?,
            profile: WorkloadProfile::default(),
            freq_scale: Constrained::new_unchecked(1.0),
            allow_burst: true,
            ventilation: Ventilation::default(),
            safety: Constrained::new_unchecked(Ratio::new::<percent>(10.0)),
            thermal_mass: Constrained::new_unchecked(HeatCapacity::new::<joule_per_kelvin>(350.0)),
            transient: Some(TransientConfig::default()),
        })
    }

    #[must_use]
    pub fn with_profile(self, profile: WorkloadProfile) -> Self {
        Self { profile, ..self }
    }

    /// Sets the frequency scale.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Constraint`] unless `freq_scale` is strictly positive.
    pub fn with_freq_scale(self, freq_scale: f64) -> Result<Self, InputError> {
        let freq_scale =
            StrictlyPositive::new(freq_scale).map_err(InputError::constraint("frequency scale"))?;
        Ok(Self { freq_scale, ..self })
    }

    #[must_use]
    pub fn with_burst(self, allow_burst: bool) -> Self {
        Self { allow_burst, ..self }
    }

    #[must_use]
    pub fn with_ventilation(self, ventilation: Ventilation) -> Self {
        Self { ventilation, ..self }
    }

    /// Sets the base safety derating.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Constraint`] unless `safety` lies in `[0, 1]`.
    pub fn with_safety(self, safety: Ratio) -> Result<Self, InputError> {
        let safety = UnitInterval::new(safety).map_err(InputError::constraint("safety margin"))?;
        Ok(Self { safety, ..self })
    }

    /// Sets the lumped thermal mass.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Constraint`] unless the mass is strictly positive.
    pub fn with_thermal_mass(self, thermal_mass: HeatCapacity) -> Result<Self, InputError> {
        let thermal_mass =
            StrictlyPositive::new(thermal_mass).map_err(InputError::constraint("thermal mass"))?;
        Ok(Self { thermal_mass, ..self })
    }

    #[must_use]
    pub fn with_transient(self, config: TransientConfig) -> Self {
        Self {
            transient: Some(config),
            ..self
        }
    }

    #[must_use]
    pub fn without_transient(self) -> Self {
        Self {
            transient: None,
            ..self
        }
    }
}
