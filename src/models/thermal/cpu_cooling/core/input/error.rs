use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors from validating simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    /// The ambient temperature is outside the supported range.
    #[error("ambient temperature {celsius} °C is outside the supported range")]
    AmbientOutOfRange { celsius: f64 },

    /// A parameter violates a numeric invariant.
    #[error("invalid {parameter}")]
    Constraint {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl InputError {
    pub(super) fn constraint(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Constraint { parameter, source }
    }
}
