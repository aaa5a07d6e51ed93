//! Search for the workload at which a cooler stops keeping up.
//!
//! The steady temperature never decreases with workload, so the workload at
//! which it reaches the throttle threshold can be bracketed and found by
//! bisection.

mod config;
mod error;
mod problem;

pub use config::HeadroomConfig;
pub use error::HeadroomError;
pub use problem::HeadroomPoint;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::hardware::{CoolerSpec, CpuSpec};

use super::{Calibration, SimulationParams};

use problem::{HeadroomModel, HeadroomProblem};

/// Where a CPU and cooler pair starts to throttle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Headroom {
    /// The threshold is not reached anywhere in the searched range.
    Unconstrained {
        /// Steady temperature at the top of the range.
        max_steady_state: ThermodynamicTemperature,
    },

    /// The threshold is already reached at the bottom of the range.
    ThrottlesAtMinimum { steady_state: ThermodynamicTemperature },

    /// The threshold is reached at `workload`.
    ThrottlesAt {
        workload: Ratio,
        steady_state: ThermodynamicTemperature,
    },
}

/// Finds the lowest workload at which the steady temperature reaches the
/// calibration's throttle threshold.
///
/// Every parameter other than the workload is taken from `params`.
///
/// # Errors
///
/// Returns [`HeadroomError`] if the search range is empty or the solver
/// fails to converge.
pub fn throttle_headroom(
    cpu: &CpuSpec,
    cooler: &CoolerSpec,
    params: &SimulationParams,
    calibration: &Calibration,
    config: &HeadroomConfig,
) -> Result<Headroom, HeadroomError> {
    let min = *config.min_workload.as_ref();
    let max = config.max_workload;
    if max.get::<ratio>().is_nan() || max <= min {
        return Err(HeadroomError::EmptyRange { min, max });
    }

    let model = HeadroomModel::new(cpu, cooler, params, calibration);
    let problem = HeadroomProblem::new(calibration.throttle_threshold);

    let low = model.call(&min)?;
    let high = model.call(&max)?;

    if problem.residual(&low) >= 0.0 {
        return Ok(Headroom::ThrottlesAtMinimum {
            steady_state: low.steady_state,
        });
    }
    if problem.residual(&high) < 0.0 {
        return Ok(Headroom::Unconstrained {
            max_steady_state: high.steady_state,
        });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [min.get::<ratio>(), max.get::<ratio>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Only a non-positive workload fails, which lies outside the bracket.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(HeadroomError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    let point = solution.snapshot.output;
    debug!(
        cpu = %cpu.name,
        cooler = cooler.name(),
        workload_pct = point.workload.get::<percent>(),
        iters = solution.iters,
        "found throttle headroom"
    );

    Ok(Headroom::ThrottlesAt {
        workload: point.workload,
        steady_state: point.steady_state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::{
        models::thermal::cpu_cooling::core::{
            run_simulation,
            test_support::{air_cooler, aio_cooler, intel_cpu, params},
        },
        support::{constraint::StrictlyPositive, hardware::AirTier},
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn with_threshold(celsius_threshold: f64) -> Calibration {
        Calibration {
            throttle_threshold: celsius(celsius_threshold),
            ..Calibration::default()
        }
    }

    #[test]
    fn finds_threshold_crossing() {
        let cpu = intel_cpu(2019);
        let cooler = air_cooler(AirTier::Mainstream, 150.0);
        let params = params(25.0, 100.0);
        let calibration = with_threshold(45.0);

        let headroom =
            throttle_headroom(&cpu, &cooler, &params, &calibration, &HeadroomConfig::default())
                .unwrap();

        let Headroom::ThrottlesAt {
            workload,
            steady_state,
        } = headroom
        else {
            panic!("expected a crossing, got {headroom:?}");
        };

        assert_relative_eq!(steady_state.get::<degree_celsius>(), 45.0, epsilon = 1e-6);
        assert!(workload > Ratio::new::<percent>(1.0));
        assert!(workload < Ratio::new::<percent>(150.0));

        // Re-simulating at the found workload lands on the threshold.
        let check = SimulationParams {
            workload: StrictlyPositive::new(workload).unwrap(),
            ..params
        };
        let result = run_simulation(&cpu, &cooler, &check, &calibration);
        assert_relative_eq!(
            result.temperature.steady_state.get::<degree_celsius>(),
            45.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn strong_cooler_never_throttles() {
        let headroom = throttle_headroom(
            &intel_cpu(2019),
            &aio_cooler(360, 350.0),
            &params(25.0, 100.0),
            &Calibration::default(),
            &HeadroomConfig::default(),
        )
        .unwrap();

        assert!(matches!(
            headroom,
            Headroom::Unconstrained { max_steady_state } if max_steady_state < celsius(95.0)
        ));
    }

    #[test]
    fn hot_room_throttles_immediately() {
        let headroom = throttle_headroom(
            &intel_cpu(2019),
            &air_cooler(AirTier::Budget, 95.0),
            &params(40.0, 100.0),
            &with_threshold(40.0),
            &HeadroomConfig::default(),
        )
        .unwrap();

        assert!(matches!(headroom, Headroom::ThrottlesAtMinimum { .. }));
    }

    #[test]
    fn rejects_empty_range() {
        let config = HeadroomConfig {
            max_workload: Ratio::new::<percent>(0.5),
            ..HeadroomConfig::default()
        };
        let result = throttle_headroom(
            &intel_cpu(2019),
            &air_cooler(AirTier::Budget, 95.0),
            &params(25.0, 100.0),
            &Calibration::default(),
            &config,
        );

        assert!(matches!(result, Err(HeadroomError::EmptyRange { .. })));
    }
}
