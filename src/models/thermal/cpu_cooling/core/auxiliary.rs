//! Noise and lifetime estimates derived from utilization.

use uom::si::{f64::Ratio, ratio::ratio};

/// Noise as a function of utilization.
///
/// `noise = rated × (floor + (1 − floor) × sqrt(min(1, utilization)))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel {
    /// Share of the rated noise emitted at zero utilization.
    pub floor: f64,
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self { floor: 0.6 }
    }
}

/// Lifetime penalty for coolers running near their capacity.
///
/// Up to `derate_start` the rated lifetime holds. Beyond it the lifetime
/// falls linearly, losing `max_penalty` of its value over `derate_span`,
/// and never drops below `min_years`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurabilityModel {
    pub derate_start: Ratio,
    pub derate_span: Ratio,
    pub max_penalty: f64,
    pub min_years: u32,
}

impl Default for DurabilityModel {
    fn default() -> Self {
        Self {
            derate_start: Ratio::new::<ratio>(0.80),
            derate_span: Ratio::new::<ratio>(0.20),
            max_penalty: 0.5,
            min_years: 1,
        }
    }
}

/// Estimates noise in dB(A) from the cooler's rated noise and utilization.
///
/// Bounded above by `rated_dba`; utilization above 100 % counts as 100 %.
#[must_use]
pub fn estimate_noise(rated_dba: f64, utilization: Ratio, model: &NoiseModel) -> f64 {
    let load = utilization.get::<ratio>().clamp(0.0, 1.0);
    rated_dba * (model.floor + (1.0 - model.floor) * load.sqrt())
}

/// Estimates the cooler lifetime in whole years.
#[must_use]
pub fn estimate_lifetime(rated_years: u32, utilization: Ratio, model: &DurabilityModel) -> u32 {
    let u = utilization.get::<ratio>();
    let start = model.derate_start.get::<ratio>();
    if u <= start {
        return rated_years;
    }

    let span = model.derate_span.get::<ratio>().max(f64::EPSILON);
    let progress = ((u - start) / span).min(1.0);
    let years = (f64::from(rated_years) * (1.0 - model.max_penalty * progress)).floor();

    // `years` is finite and below `rated_years`, so the cast cannot overflow.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let years = years.max(0.0) as u32;
    years.max(model.min_years)
}
