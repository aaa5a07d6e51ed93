//! Problem formulation for the throttle headroom search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::{
    models::thermal::cpu_cooling::core::{
        Calibration, InputError, SimulationParams, run_simulation,
    },
    support::{
        constraint::StrictlyPositive,
        hardware::{CoolerSpec, CpuSpec},
        units::TemperatureDifference,
    },
};

/// Steady temperature reached at one workload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadroomPoint {
    pub workload: Ratio,
    pub steady_state: ThermodynamicTemperature,
}

/// Model adapter exposing the workload as the sole input.
///
/// Every other parameter is held at the caller's values, and no transient
/// run is performed.
pub(super) struct HeadroomModel<'a> {
    cpu: &'a CpuSpec,
    cooler: &'a CoolerSpec,
    params: SimulationParams,
    calibration: &'a Calibration,
}

impl<'a> HeadroomModel<'a> {
    pub(super) fn new(
        cpu: &'a CpuSpec,
        cooler: &'a CoolerSpec,
        params: &SimulationParams,
        calibration: &'a Calibration,
    ) -> Self {
        Self {
            cpu,
            cooler,
            params: params.without_transient(),
            calibration,
        }
    }
}

impl Model for HeadroomModel<'_> {
    type Input = Ratio;
    type Output = HeadroomPoint;
    type Error = InputError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let workload = StrictlyPositive::new(*input).map_err(|source| InputError::Constraint {
            parameter: "workload",
            source,
        })?;
        let params = SimulationParams {
            workload,
            ..self.params
        };

        let result = run_simulation(self.cpu, self.cooler, &params, self.calibration);
        Ok(HeadroomPoint {
            workload: *input,
            steady_state: result.temperature.steady_state,
        })
    }
}

/// Equation problem for the throttle headroom search.
///
/// Computes the residual as `steady_state - threshold`.
pub(super) struct HeadroomProblem {
    threshold: ThermodynamicTemperature,
}

impl HeadroomProblem {
    pub(super) fn new(threshold: ThermodynamicTemperature) -> Self {
        Self { threshold }
    }

    pub(super) fn residual(&self, point: &HeadroomPoint) -> f64 {
        point
            .steady_state
            .minus(self.threshold)
            .get::<delta_kelvin>()
    }
}

impl EquationProblem<1> for HeadroomProblem {
    type Input = Ratio;
    type Output = HeadroomPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Ratio::new::<ratio>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
