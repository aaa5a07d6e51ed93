//! Fan speed as a function of cooler utilization.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Ratio},
    ratio::percent,
};

/// How heatsink resistance is corrected when the fan is not spinning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoppedFanPolicy {
    /// Double the nominal heatsink resistance.
    #[default]
    DoubleResistance,

    /// Apply no correction, as if the fan ran at the reference speed.
    UseReference,
}

/// Piecewise-linear fan curve and its effect on heatsink resistance.
///
/// Below `ramp_start` the fan idles; between `ramp_start` and `ramp_end` the
/// speed rises linearly to `max_speed`; above `ramp_end` it stays at
/// `max_speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanCurve {
    pub idle_speed: AngularVelocity,
    pub max_speed: AngularVelocity,
    pub ramp_start: Ratio,
    pub ramp_end: Ratio,

    /// Speed at which heatsink resistances are specified.
    pub reference_speed: AngularVelocity,

    /// Exponent of the `(reference / actual)` resistance correction.
    pub exponent: f64,

    pub stopped: StoppedFanPolicy,
}

impl Default for FanCurve {
    fn default() -> Self {
        Self {
            idle_speed: AngularVelocity::new::<revolution_per_minute>(600.0),
            max_speed: AngularVelocity::new::<revolution_per_minute>(2200.0),
            ramp_start: Ratio::new::<percent>(15.0),
            ramp_end: Ratio::new::<percent>(100.0),
            reference_speed: AngularVelocity::new::<revolution_per_minute>(1500.0),
            exponent: 0.8,
            stopped: StoppedFanPolicy::default(),
        }
    }
}

impl FanCurve {
    /// Returns the fan speed for a cooler utilization.
    ///
    /// Utilization above `ramp_end` (an undersized cooler) clamps to
    /// `max_speed`.
    #[must_use]
    pub fn speed(&self, utilization: Ratio) -> AngularVelocity {
        let u = utilization.get::<percent>();
        let start = self.ramp_start.get::<percent>();
        let end = self.ramp_end.get::<percent>();

        if u <= start {
            return self.idle_speed;
        }
        if u >= end {
            return self.max_speed;
        }

        let idle = self.idle_speed.get::<revolution_per_minute>();
        let max = self.max_speed.get::<revolution_per_minute>();
        let fraction = (u - start) / (end - start);
        AngularVelocity::new::<revolution_per_minute>(idle + (max - idle) * fraction)
    }

    /// Returns the factor applied to the heatsink resistance at `speed`.
    ///
    /// The factor is `(reference / speed)^exponent`: faster fans lower the
    /// resistance with diminishing returns.
    #[must_use]
    pub fn resistance_factor(&self, speed: AngularVelocity) -> f64 {
        let rpm = speed.get::<revolution_per_minute>();
        if rpm <= 0.0 || rpm.is_nan() {
            return match self.stopped {
                StoppedFanPolicy::DoubleResistance => 2.0,
                StoppedFanPolicy::UseReference => 1.0,
            };
        }

        let reference = self.reference_speed.get::<revolution_per_minute>();
        (reference / rpm).powf(self.exponent)
    }
}
