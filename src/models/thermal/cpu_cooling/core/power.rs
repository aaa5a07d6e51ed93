//! Instantaneous CPU power draw.

use uom::si::{
    f64::{Power, Ratio},
    power::watt,
    ratio::ratio,
};

/// Fractions of TDP that make up the power estimate.
///
/// The estimate is the sum of three terms, each proportional to TDP:
///
/// - idle: `idle_fraction × tdp`
/// - dynamic: `tdp × workload × dynamic_fraction × profile_factor × freq_scale`
/// - leakage: `leakage_fraction × tdp × (1 + leakage_freq_sensitivity × (freq_scale − 1))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCoefficients {
    pub idle_fraction: f64,
    pub dynamic_fraction: f64,
    pub leakage_fraction: f64,
    pub leakage_freq_sensitivity: f64,
}

impl Default for PowerCoefficients {
    fn default() -> Self {
        Self {
            idle_fraction: 0.10,
            dynamic_fraction: 0.80,
            leakage_fraction: 0.02,
            leakage_freq_sensitivity: 0.05,
        }
    }
}

/// Estimates CPU power draw.
///
/// `workload` is a share of TDP-equivalent load and is not capped at 100 %,
/// so stress tests can be modeled. `profile_factor` scales the dynamic term
/// by how demanding the workload is, and `freq_scale` is the clock relative
/// to nominal. The result is floored at zero.
#[must_use]
pub fn estimate_power(
    tdp: Power,
    workload: Ratio,
    profile_factor: f64,
    freq_scale: f64,
    coefficients: &PowerCoefficients,
) -> Power {
    let tdp = tdp.get::<watt>();

    let idle = coefficients.idle_fraction * tdp;
    let dynamic = tdp
        * workload.get::<ratio>()
        * coefficients.dynamic_fraction
        * profile_factor
        * freq_scale;
    let leakage = coefficients.leakage_fraction
        * tdp
        * (1.0 + coefficients.leakage_freq_sensitivity * (freq_scale - 1.0));

    Power::new::<watt>((idle + dynamic + leakage).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::percent;

    fn tdp(watts: f64) -> Power {
        Power::new::<watt>(watts)
    }

    #[test]
    fn sustained_benchmark_on_65w_part() {
        let power = estimate_power(
            tdp(65.0),
            Ratio::new::<percent>(100.0),
            1.0,
            1.0,
            &PowerCoefficients::default(),
        );

        // 6.5 idle + 52 dynamic + 1.3 leakage
        assert_relative_eq!(power.get::<watt>(), 59.8, epsilon = 1e-9);
    }

    #[test]
    fn overclock_raises_dynamic_and_leakage() {
        let coefficients = PowerCoefficients::default();
        let power = estimate_power(
            tdp(100.0),
            Ratio::new::<percent>(50.0),
            0.55,
            1.2,
            &coefficients,
        );

        let expected = 10.0 + 100.0 * 0.5 * 0.8 * 0.55 * 1.2 + 2.0 * (1.0 + 0.05 * 0.2);
        assert_relative_eq!(power.get::<watt>(), expected, epsilon = 1e-9);
    }

    #[test]
    fn workload_is_not_capped() {
        let coefficients = PowerCoefficients::default();
        let at = |workload_pct| {
            estimate_power(
                tdp(65.0),
                Ratio::new::<percent>(workload_pct),
                1.0,
                1.0,
                &coefficients,
            )
        };
        assert!(at(150.0) > at(100.0));
    }

    #[test]
    fn never_negative() {
        let coefficients = PowerCoefficients {
            idle_fraction: -1.0,
            ..PowerCoefficients::default()
        };
        let power = estimate_power(
            tdp(65.0),
            Ratio::new::<percent>(10.0),
            0.15,
            1.0,
            &coefficients,
        );
        assert_eq!(power.get::<watt>(), 0.0);
    }
}
