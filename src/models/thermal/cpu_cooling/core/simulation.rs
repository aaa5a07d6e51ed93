//! The end-to-end simulation pipeline.

use tracing::{debug, warn};
use uom::si::{
    angular_velocity::revolution_per_minute, power::watt, ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::hardware::{CoolerSpec, CpuSpec};

use super::{
    Burst, BurstProfile, Calibration, DerivedMetrics, PowerEstimate, PowerLimits,
    ResistancePolicy, Risk, SimulationParams, SimulationResult, TemperatureResult, ThermalState,
    derive_power_limits, derive_resistance, effective_capacity, estimate_lifetime, estimate_noise,
    estimate_power, simulate, steady_temperature, utilization,
};

/// Simulates a CPU and cooler under the given conditions.
///
/// The pipeline runs power, power limits, cooler capacity, fan speed,
/// resistance, steady state, and (optionally) the transient response, in
/// that order. Degenerate inputs such as an unrated cooler never fail: they
/// produce finite results flagged in [`Risk`].
#[must_use]
pub fn run_simulation(
    cpu: &CpuSpec,
    cooler: &CoolerSpec,
    params: &SimulationParams,
    calibration: &Calibration,
) -> SimulationResult {
    let power = estimate(cpu, params, calibration);

    let capacity = effective_capacity(
        cooler.nominal_capacity(),
        power.applied,
        params.ventilation.factor(),
        *params.safety.as_ref(),
        &calibration.capacity,
    );
    let utilization = utilization(power.applied, capacity.effective);
    let fan_speed = calibration.fan.speed(utilization);

    let resistance = derive_resistance(
        cpu,
        cooler,
        fan_speed,
        ResistancePolicy {
            junction: &calibration.junction,
            contact: calibration.contact,
            heatsink: &calibration.heatsink,
            fan: &calibration.fan,
        },
    );
    let total_resistance = resistance.total();

    let ambient = params.ambient.temperature();
    let offset = calibration.hotspot_offset(cpu.vendor);
    let steady_state = steady_temperature(power.applied, ambient, total_resistance) + offset;

    let transient = params.transient.map(|config| {
        let profile = power_profile(cpu, params, calibration, &power);
        simulate(&profile, total_resistance, params.thermal_mass, ambient, &config)
    });

    let metrics = DerivedMetrics {
        noise_dba: estimate_noise(cooler.noise_dba(), utilization, &calibration.noise),
        lifetime_years: estimate_lifetime(
            cooler.rated_lifetime_years(),
            utilization,
            &calibration.durability,
        ),
    };

    let risk = Risk {
        cooler_insufficient: utilization.get::<percent>() > 100.0,
        throttling: steady_state >= calibration.throttle_threshold,
    };

    debug!(
        cpu = %cpu.name,
        cooler = cooler.name(),
        modeled_w = power.modeled.get::<watt>(),
        applied_w = power.applied.get::<watt>(),
        effective_capacity_w = capacity.effective.get::<watt>(),
        utilization_pct = utilization.get::<percent>(),
        fan_rpm = fan_speed.get::<revolution_per_minute>(),
        total_k_per_w = total_resistance.kelvin_per_watt(),
        steady_c = steady_state.get::<degree_celsius>(),
        "simulated cooling"
    );
    if risk.cooler_insufficient {
        warn!(
            cooler = cooler.name(),
            utilization_pct = utilization.get::<percent>(),
            "cooler capacity exceeded"
        );
    }
    if risk.throttling {
        warn!(
            cpu = %cpu.name,
            steady_c = steady_state.get::<degree_celsius>(),
            threshold_c = calibration.throttle_threshold.get::<degree_celsius>(),
            "steady temperature reaches throttle threshold"
        );
    }

    SimulationResult {
        power,
        thermal: ThermalState {
            resistance,
            total_resistance,
            fan_speed,
            capacity,
            utilization,
        },
        temperature: TemperatureResult {
            steady_state,
            hotspot_offset: offset,
            transient,
        },
        metrics,
        risk,
    }
}

fn estimate(cpu: &CpuSpec, params: &SimulationParams, calibration: &Calibration) -> PowerEstimate {
    let modeled = estimate_power(
        cpu.tdp(),
        *params.workload.as_ref(),
        params.profile.factor(),
        *params.freq_scale.as_ref(),
        &calibration.power,
    );
    let limits = derive_power_limits(cpu.tdp(), cpu.release_year, &calibration.power_limits);

    PowerEstimate {
        modeled,
        applied: limits.apply(modeled, params.allow_burst),
        limits,
    }
}

/// Builds the transient load: warm-up, then a PL2 burst when one is allowed
/// and the workload asks for more than PL1, otherwise the applied power.
fn power_profile(
    cpu: &CpuSpec,
    params: &SimulationParams,
    calibration: &Calibration,
    power: &PowerEstimate,
) -> BurstProfile {
    let warmup = &calibration.warmup;
    let PowerLimits { pl1, pl2, tau } = power.limits;

    let burst = (params.allow_burst && power.modeled > pl1).then_some(Burst {
        modeled: power.modeled,
        pl1,
        pl2,
        tau,
    });

    BurstProfile {
        warmup: estimate_power(
            cpu.tdp(),
            warmup.workload,
            warmup.profile_factor,
            *params.freq_scale.as_ref(),
            &calibration.power,
        ),
        warmup_end: warmup.end,
        burst,
        sustained: power.applied,
    }
}
