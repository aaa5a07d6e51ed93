use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Search range and tolerances for the throttle headroom search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadroomConfig {
    /// Lowest workload searched.
    pub min_workload: Constrained<Ratio, StrictlyPositive>,

    /// Highest workload searched.
    pub max_workload: Ratio,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the workload.
    pub workload_tol: Ratio,

    /// Absolute tolerance on the temperature residual (steady − threshold).
    pub temperature_tol: TemperatureInterval,
}

impl Default for HeadroomConfig {
    fn default() -> Self {
        Self {
            min_workload: Constrained::new_unchecked(Ratio::new::<percent>(1.0)),
            max_workload: Ratio::new::<percent>(150.0),
            max_iters: 100,
            workload_tol: Ratio::new::<ratio>(1e-9),
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl HeadroomConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.workload_tol.get::<ratio>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
