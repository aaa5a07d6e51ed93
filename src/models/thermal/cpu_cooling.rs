//! CPU cooler models.
//!
//! This module provides [`twine_core::Model`] implementations that estimate
//! how well a cooler handles a CPU under a given workload:
//!
//! - [`CpuCooling`]: power, resistance chain, steady and transient
//!   temperature, noise, and lifetime for one operating point
//! - [`ThrottleHeadroom`]: the workload at which the steady temperature
//!   reaches the throttle threshold
//!
//! Both are thin adapters over the internal `core` module and share its
//! [`Calibration`]. The individual pipeline steps, such as [`estimate_power`]
//! and [`simulate`], are exported too, next to the configuration types they
//! take.

pub(crate) mod core;

mod throttle_headroom;

pub use self::core::{
    Ambient, Burst, BurstProfile, Calibration, CapacityDerating, DerivedMetrics, DurabilityModel,
    EffectiveCapacity, FanCurve, Headroom, HeadroomConfig, HeadroomError, HeadroomPoint,
    HeatsinkModel, HeatsinkTiers, HotspotOffset, InputError, Integrator, JunctionResistance,
    NoiseModel, PowerCoefficients, PowerEstimate, PowerLimitMultipliers, PowerLimitTier,
    PowerLimitTiers, PowerLimits, PowerProfile, RadiatorResistance, RatedCapacityResistance,
    ResistanceChain, ResistancePolicy, Risk, SimulationParams, SimulationResult,
    StoppedFanPolicy, TemperatureResult, ThermalState, Transient, TransientConfig,
    TransientPoint, TransientSeries, UNRATED_UTILIZATION_PERCENT, Ventilation, WarmupPhase,
    WorkloadProfile, derive_power_limits, derive_resistance, effective_capacity,
    estimate_lifetime, estimate_noise, estimate_power, run_simulation, simulate,
    steady_temperature, throttle_headroom, utilization,
};
pub use throttle_headroom::ThrottleHeadroom;

use std::convert::Infallible;

use twine_core::Model;

use crate::support::hardware::{Catalog, CatalogError, CoolerSpec, CpuSpec, InMemoryCatalog};

/// A CPU, a cooler, and the conditions to simulate them under.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub cpu: CpuSpec,
    pub cooler: CoolerSpec,
    pub params: SimulationParams,
}

/// Simulates CPU and cooler pairs with a fixed calibration.
///
/// # Example
///
/// ```
/// use cpu_cooling::models::thermal::cpu_cooling::{CpuCooling, SimulationParams};
/// use uom::si::{
///     f64::{Ratio, ThermodynamicTemperature},
///     ratio::percent,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let model = CpuCooling::default();
/// let catalog = model
///     .load_catalog(
///         r#"{
///             "cpus": [{
///                 "name": "Core i5-12400F", "tdp_watts": 65, "release_year": 2022,
///                 "base_ghz": 2.5, "boost_ghz": 4.4, "vendor": "intel"
///             }],
///             "coolers": [{
///                 "name": "NH-D15", "kind": { "type": "air", "tier": "premium" },
///                 "rated_watts": 250, "noise_dba": 24, "lifetime_years": 8
///             }]
///         }"#,
///     )
///     .unwrap();
///
/// let params = SimulationParams::new(
///     ThermodynamicTemperature::new::<degree_celsius>(25.0),
///     Ratio::new::<percent>(100.0),
/// )
/// .unwrap();
///
/// let result = model
///     .simulate_named(&catalog, "Core i5-12400F", "NH-D15", &params)
///     .unwrap();
///
/// assert!(!result.risk.any());
/// assert!(result.temperature.steady_state.get::<degree_celsius>() > 25.0);
/// assert_eq!(result.temperature.transient.unwrap().len(), 181);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuCooling {
    calibration: Calibration,
}

impl CpuCooling {
    #[must_use]
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    #[must_use]
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Loads a JSON catalog, deriving nominal cooler capacities with this
    /// model's calibration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the document is malformed or a record is
    /// invalid.
    pub fn load_catalog(&self, json: &str) -> Result<InMemoryCatalog, CatalogError> {
        InMemoryCatalog::from_json(json, self.calibration.nominal_capacity_fraction)
    }

    #[must_use]
    pub fn simulate(
        &self,
        cpu: &CpuSpec,
        cooler: &CoolerSpec,
        params: &SimulationParams,
    ) -> SimulationResult {
        run_simulation(cpu, cooler, params, &self.calibration)
    }

    /// Looks up a CPU and a cooler by name and simulates them.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if either name is not in the catalog.
    pub fn simulate_named(
        &self,
        catalog: &impl Catalog,
        cpu: &str,
        cooler: &str,
        params: &SimulationParams,
    ) -> Result<SimulationResult, CatalogError> {
        let cpu = catalog.cpu(cpu)?;
        let cooler = catalog.cooler(cooler)?;
        Ok(self.simulate(cpu, cooler, params))
    }
}

impl Model for CpuCooling {
    type Input = Scenario;
    type Output = SimulationResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.simulate(&input.cpu, &input.cooler, &input.params))
    }
}
