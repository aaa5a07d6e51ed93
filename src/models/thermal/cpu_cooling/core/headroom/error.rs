use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Ratio, TemperatureInterval};

use crate::models::thermal::cpu_cooling::core::InputError;

/// Errors that can occur while searching for throttle headroom.
#[derive(Debug, Error)]
pub enum HeadroomError {
    /// The configured search range is empty.
    #[error("workload search range is empty: {min:?} to {max:?}")]
    EmptyRange { min: Ratio, max: Ratio },

    /// A workload in the search range was rejected.
    #[error("invalid workload")]
    Input(#[from] InputError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Smallest distance from the throttle threshold reached.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
