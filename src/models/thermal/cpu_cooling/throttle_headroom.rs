use twine_core::Model;

use super::{
    Scenario,
    core::{Calibration, Headroom, HeadroomConfig, HeadroomError, throttle_headroom},
};

/// Finds the workload at which a scenario starts to throttle.
///
/// The scenario's own workload is ignored; every other parameter is held
/// fixed while the workload is searched over the configured range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThrottleHeadroom {
    pub calibration: Calibration,
    pub config: HeadroomConfig,
}

impl Model for ThrottleHeadroom {
    type Input = Scenario;
    type Output = Headroom;
    type Error = HeadroomError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        throttle_headroom(
            &input.cpu,
            &input.cooler,
            &input.params,
            &self.calibration,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Ratio, ThermodynamicTemperature},
        ratio::percent,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        models::thermal::cpu_cooling::{
            CpuCooling, SimulationParams, WorkloadProfile,
            core::test_support::{air_cooler, intel_cpu, params},
        },
        support::{constraint::StrictlyPositive, hardware::AirTier},
    };

    #[test]
    fn crossing_workload_separates_safe_from_throttling() {
        let calibration = Calibration {
            throttle_threshold: ThermodynamicTemperature::new::<degree_celsius>(70.0),
            ..Calibration::default()
        };
        let model = ThrottleHeadroom {
            calibration: calibration.clone(),
            config: HeadroomConfig::default(),
        };
        let scenario = Scenario {
            cpu: intel_cpu(2022),
            cooler: air_cooler(AirTier::Budget, 95.0),
            params: params(35.0, 100.0).with_profile(WorkloadProfile::AvxHeavy),
        };

        let Headroom::ThrottlesAt { workload, .. } = model.call(&scenario).unwrap() else {
            panic!("expected a crossing");
        };

        let below = Scenario {
            params: SimulationParams {
                workload: StrictlyPositive::new(workload * 0.9).unwrap(),
                ..scenario.params
            },
            ..scenario.clone()
        };
        let above = Scenario {
            params: SimulationParams {
                workload: StrictlyPositive::new(workload * 1.1).unwrap(),
                ..scenario.params
            },
            ..scenario
        };

        let simulator = CpuCooling::new(calibration);
        let Ok(below) = simulator.call(&below);
        let Ok(above) = simulator.call(&above);
        assert!(!below.risk.throttling);
        assert!(above.risk.throttling);
        assert!(workload < Ratio::new::<percent>(150.0));
    }
}
