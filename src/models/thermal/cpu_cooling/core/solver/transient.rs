use tracing::warn;
use uom::si::{
    f64::{HeatCapacity, TemperatureInterval, ThermodynamicTemperature, Time},
    heat_capacity::joule_per_kelvin,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    time::second,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    units::ThermalResistance,
};

use super::PowerProfile;

/// Time-stepping scheme of the transient solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Integrator {
    /// Explicit forward Euler with power sampled at the start of each step.
    ///
    /// Steps at or above the thermal time constant `R × C` are taken with
    /// the exact solution instead.
    #[default]
    ForwardEuler,

    /// Exact solution of each step, holding power constant over the step.
    ExactExponential,
}

/// Step, duration, and scheme of a transient run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientConfig {
    pub step: Constrained<Time, StrictlyPositive>,

    /// Simulated time span; zero or less yields only the initial point.
    ///
    /// Runs longer than [`TransientConfig::MAX_POINTS`] points are truncated.
    pub duration: Time,

    pub integrator: Integrator,
}

impl Default for TransientConfig {
    fn default() -> Self {
        Self {
            step: Constrained::new_unchecked(Time::new::<second>(1.0)),
            duration: Time::new::<second>(180.0),
            integrator: Integrator::default(),
        }
    }
}

impl TransientConfig {
    /// Largest number of points a run produces.
    pub const MAX_POINTS: usize = 100_000;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if `step` is not strictly positive, if
    /// `duration` is negative or `NaN`, or
    /// [`ConstraintError::AboveMaximum`] if the run would exceed
    /// [`TransientConfig::MAX_POINTS`] points.
    pub fn new(
        step: Time,
        duration: Time,
        integrator: Integrator,
    ) -> Result<Self, ConstraintError> {
        let step = StrictlyPositive::new(step)?;
        let duration = NonNegative::new(duration)?.into_inner();

        #[allow(clippy::cast_precision_loss)]
        let max_points = Self::MAX_POINTS as f64;
        let steps = duration.get::<second>() / step.as_ref().get::<second>();
        if !steps.is_finite() || steps.floor() + 1.0 > max_points {
            return Err(ConstraintError::AboveMaximum);
        }

        Ok(Self {
            step,
            duration,
            integrator,
        })
    }

    /// Number of points a run produces: one per step, plus the initial point.
    ///
    /// Never exceeds [`TransientConfig::MAX_POINTS`].
    #[must_use]
    pub fn points(&self) -> usize {
        let steps = self.duration.get::<second>() / self.step.as_ref().get::<second>();
        if steps.is_nan() || steps <= 0.0 {
            return 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let max_steps = (Self::MAX_POINTS - 1) as f64;

        // Absorbs rounding in durations that are whole multiples of the step.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (steps + 1e-9).floor().min(max_steps) as usize;
        steps + 1
    }
}

/// A single sample of a transient run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientPoint {
    pub time: Time,
    pub temperature: ThermodynamicTemperature,
}

/// Ordered temperature samples of one transient run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransientSeries(Vec<TransientPoint>);

impl TransientSeries {
    #[must_use]
    pub fn points(&self) -> &[TransientPoint] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransientPoint> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TransientPoint> {
        self.0.last()
    }

    /// Returns the hottest sample, or `None` for an empty series.
    #[must_use]
    pub fn peak(&self) -> Option<&TransientPoint> {
        self.0
            .iter()
            .max_by(|a, b| a.temperature.value.total_cmp(&b.temperature.value))
    }

    /// Returns the series with every temperature raised by `offset`.
    #[must_use]
    pub fn shifted(self, offset: TemperatureInterval) -> Self {
        self.0
            .into_iter()
            .map(|point| TransientPoint {
                time: point.time,
                temperature: point.temperature + offset,
            })
            .collect()
    }
}

impl FromIterator<TransientPoint> for TransientSeries {
    fn from_iter<I: IntoIterator<Item = TransientPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransientSeries {
    type Item = &'a TransientPoint;
    type IntoIter = std::slice::Iter<'a, TransientPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lazily integrates a lumped thermal mass, one point per step.
///
/// The state is the temperature rise above ambient. The iterator is finite
/// and yields exactly [`TransientConfig::points`] items, starting at ambient.
#[derive(Debug)]
pub struct Transient<'a, P> {
    profile: &'a P,
    ambient: ThermodynamicTemperature,
    resistance: f64,
    capacity: f64,
    step: f64,
    integrator: Integrator,
    len: usize,
    index: usize,
    rise: f64,
}

impl<'a, P: PowerProfile> Transient<'a, P> {
    #[must_use]
    pub fn new(
        profile: &'a P,
        resistance: ThermalResistance,
        thermal_mass: Constrained<HeatCapacity, StrictlyPositive>,
        ambient: ThermodynamicTemperature,
        config: &TransientConfig,
    ) -> Self {
        let resistance = resistance.kelvin_per_watt();
        let capacity = thermal_mass.into_inner().get::<joule_per_kelvin>();
        let step = config.step.as_ref().get::<second>();

        let time_constant = resistance * capacity;
        let integrator = if config.integrator == Integrator::ForwardEuler
            && resistance > 0.0
            && step >= time_constant
        {
            warn!(
                step_s = step,
                time_constant_s = time_constant,
                "forward Euler step is not small against the thermal time constant, \
                 using the exact step"
            );
            Integrator::ExactExponential
        } else {
            config.integrator
        };

        Self {
            profile,
            ambient,
            resistance,
            capacity,
            step,
            integrator,
            len: config.points(),
            index: 0,
            rise: 0.0,
        }
    }

    fn time_at(&self, index: usize) -> Time {
        #[allow(clippy::cast_precision_loss)]
        let elapsed = index as f64 * self.step;
        Time::new::<second>(elapsed)
    }

    /// Advances the rise by one step with `power` held over the step.
    fn advance(&self, power: f64) -> f64 {
        // A zero resistance path keeps the mass at ambient.
        if self.resistance <= 0.0 {
            return 0.0;
        }

        match self.integrator {
            Integrator::ForwardEuler => {
                let d_rise = (power - self.rise / self.resistance) / self.capacity;
                self.rise + d_rise * self.step
            }
            Integrator::ExactExponential => {
                let target = power * self.resistance;
                let decay = (-self.step / (self.resistance * self.capacity)).exp();
                target + (self.rise - target) * decay
            }
        }
    }
}

impl<P: PowerProfile> Iterator for Transient<'_, P> {
    type Item = TransientPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }

        if self.index > 0 {
            let power = self.profile.power_at(self.time_at(self.index - 1));
            self.rise = self.advance(power.get::<watt>());
        }

        let point = TransientPoint {
            time: self.time_at(self.index),
            temperature: self.ambient + TemperatureInterval::new::<delta_kelvin>(self.rise),
        };
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<P: PowerProfile> ExactSizeIterator for Transient<'_, P> {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Power, thermodynamic_temperature::degree_celsius};

    fn mass(joules_per_kelvin: f64) -> Constrained<HeatCapacity, StrictlyPositive> {
        StrictlyPositive::new(HeatCapacity::new::<joule_per_kelvin>(joules_per_kelvin)).unwrap()
    }

    fn constant(watts: f64) -> impl Fn(Time) -> Power {
        move |_| Power::new::<watt>(watts)
    }

    #[test]
    fn point_count() {
        let config = TransientConfig::default();
        assert_eq!(config.points(), 181);

        let config = TransientConfig {
            step: StrictlyPositive::new(Time::new::<second>(0.1)).unwrap(),
            duration: Time::new::<second>(10.0),
            ..TransientConfig::default()
        };
        assert_eq!(config.points(), 101);

        let config = TransientConfig {
            duration: Time::new::<second>(2.5),
            ..TransientConfig::default()
        };
        assert_eq!(config.points(), 3);
    }

    #[test]
    fn reports_exact_length() {
        let profile = constant(10.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let transient = Transient::new(
            &profile,
            ThermalResistance::new(0.3).unwrap(),
            mass(350.0),
            ambient,
            &TransientConfig::default(),
        );
        assert_eq!(transient.len(), 181);
    }

    #[test]
    fn first_euler_step() {
        let profile = constant(100.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let points: Vec<_> = Transient::new(
            &profile,
            ThermalResistance::new(0.5).unwrap(),
            mass(200.0),
            ambient,
            &TransientConfig::default(),
        )
        .take(2)
        .collect();

        // dT = (100 − 0 / 0.5) / 200 × 1 s
        let celsius = points[1].temperature.get::<degree_celsius>();
        assert_relative_eq!(celsius, 25.5, epsilon = 1e-9);
        assert_relative_eq!(points[1].time.get::<second>(), 1.0);
    }

    #[test]
    fn zero_resistance_stays_at_ambient() {
        let profile = constant(100.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(30.0);
        for point in Transient::new(
            &profile,
            ThermalResistance::new(0.0).unwrap(),
            mass(350.0),
            ambient,
            &TransientConfig::default(),
        ) {
            let celsius = point.temperature.get::<degree_celsius>();
            assert_relative_eq!(celsius, 30.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn shift_and_peak() {
        let series: TransientSeries = [20.0, 50.0, 40.0]
            .into_iter()
            .enumerate()
            .map(|(i, celsius)| TransientPoint {
                time: Time::new::<second>(i as f64),
                temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
            })
            .collect();

        let peak = series.peak().unwrap();
        assert_relative_eq!(peak.time.get::<second>(), 1.0);

        let shifted = series.shifted(TemperatureInterval::new::<delta_kelvin>(8.0));
        let celsius_at = |index: usize| shifted.points()[index].temperature.get::<degree_celsius>();
        assert_relative_eq!(celsius_at(0), 28.0, epsilon = 1e-9);
        assert_relative_eq!(celsius_at(2), 48.0, epsilon = 1e-9);
    }

    #[test]
    fn tiny_thermal_mass_stays_finite() {
        let profile = constant(100.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let points: Vec<_> = Transient::new(
            &profile,
            ThermalResistance::new(0.3).unwrap(),
            mass(0.01),
            ambient,
            &TransientConfig::default(),
        )
        .collect();

        assert_eq!(points.len(), 181);
        assert_relative_eq!(points[0].temperature.get::<degree_celsius>(), 25.0, epsilon = 1e-9);

        // R × C = 3 ms, so every step after the first settles at the equilibrium.
        for point in &points[1..] {
            let celsius = point.temperature.get::<degree_celsius>();
            assert!(celsius.is_finite());
            assert_relative_eq!(celsius, 55.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn long_runs_are_capped() {
        let config = TransientConfig {
            duration: Time::new::<second>(1.0e300),
            ..TransientConfig::default()
        };
        assert_eq!(config.points(), TransientConfig::MAX_POINTS);

        let config = TransientConfig {
            duration: Time::new::<second>(f64::INFINITY),
            ..TransientConfig::default()
        };
        assert_eq!(config.points(), TransientConfig::MAX_POINTS);

        let config = TransientConfig {
            duration: Time::new::<second>(f64::NAN),
            ..TransientConfig::default()
        };
        assert_eq!(config.points(), 1);
    }

    #[test]
    fn validated_construction() {
        let seconds = |value: f64| Time::new::<second>(value);

        let config =
            TransientConfig::new(seconds(0.5), seconds(60.0), Integrator::ExactExponential)
                .unwrap();
        assert_eq!(config.points(), 121);

        assert_eq!(
            TransientConfig::new(seconds(0.0), seconds(60.0), Integrator::ForwardEuler),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            TransientConfig::new(seconds(1.0), seconds(-1.0), Integrator::ForwardEuler),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            TransientConfig::new(seconds(1.0), seconds(1.0e300), Integrator::ForwardEuler),
            Err(ConstraintError::AboveMaximum)
        );
        assert!(
            TransientConfig::new(seconds(1.0), seconds(99_999.0), Integrator::ForwardEuler)
                .is_ok()
        );
    }
}
