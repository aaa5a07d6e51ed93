//! Effective cooler capacity and utilization.

use uom::si::{
    f64::{Power, Ratio},
    power::watt,
    ratio::{percent, ratio},
};

/// Utilization reported when a cooler has no effective capacity at all.
pub const UNRATED_UTILIZATION_PERCENT: f64 = 999.9;

/// Load-dependent derating of a cooler's adjusted capacity.
///
/// The derating is `min(cap, slope × applied / adjusted)`, so it grows as the
/// load approaches and passes the cooler's adjusted capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityDerating {
    pub slope: f64,
    pub cap: f64,
}

impl Default for CapacityDerating {
    fn default() -> Self {
        Self {
            slope: 0.15,
            cap: 0.20,
        }
    }
}

/// Capacity of a cooler under the current conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveCapacity {
    /// Nominal capacity after ventilation and the base safety derating.
    pub adjusted: Power,

    /// Load-dependent derating applied on top of `adjusted`.
    pub dynamic_derate: Ratio,

    pub effective: Power,
}

/// Computes a cooler's effective capacity.
///
/// `ventilation` is the case airflow factor (1.0 for a well ventilated case)
/// and `safety` the fixed base derating. A cooler with no nominal capacity
/// has no effective capacity.
#[must_use]
pub fn effective_capacity(
    nominal: Power,
    applied: Power,
    ventilation: Ratio,
    safety: Ratio,
    derating: &CapacityDerating,
) -> EffectiveCapacity {
    let nominal = nominal.get::<watt>();
    if nominal <= 0.0 {
        return EffectiveCapacity {
            adjusted: Power::new::<watt>(0.0),
            dynamic_derate: Ratio::new::<ratio>(0.0),
            effective: Power::new::<watt>(0.0),
        };
    }

    let adjusted = nominal * ventilation.get::<ratio>() * (1.0 - safety.get::<ratio>());
    let dynamic = (derating.slope * applied.get::<watt>() / adjusted.max(1.0)).min(derating.cap);
    let effective = adjusted * (1.0 - dynamic);

    EffectiveCapacity {
        adjusted: Power::new::<watt>(adjusted),
        dynamic_derate: Ratio::new::<ratio>(dynamic),
        effective: Power::new::<watt>(effective),
    }
}

/// Share of the effective capacity taken by the applied power.
///
/// Values above 100 % mean the cooler is undersized. A cooler with no
/// effective capacity reports [`UNRATED_UTILIZATION_PERCENT`].
#[must_use]
pub fn utilization(applied: Power, effective: Power) -> Ratio {
    let effective = effective.get::<watt>();
    if effective <= 0.0 {
        return Ratio::new::<percent>(UNRATED_UTILIZATION_PERCENT);
    }
    Ratio::new::<ratio>(applied.get::<watt>() / effective.max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn watts(w: f64) -> Power {
        Power::new::<watt>(w)
    }

    #[test]
    fn reference_scenario() {
        let capacity = effective_capacity(
            watts(200.0),
            watts(59.8),
            Ratio::new::<ratio>(1.0),
            Ratio::new::<percent>(10.0),
            &CapacityDerating::default(),
        );

        assert_relative_eq!(capacity.adjusted.get::<watt>(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(
            capacity.dynamic_derate.get::<ratio>(),
            0.15 * 59.8 / 180.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(capacity.effective.get::<watt>(), 171.03, epsilon = 0.01);

        let u = utilization(watts(59.8), capacity.effective);
        assert_relative_eq!(u.get::<percent>(), 34.96, epsilon = 0.05);
    }

    #[test]
    fn poor_ventilation_reduces_capacity() {
        let derating = CapacityDerating::default();
        let safety = Ratio::new::<percent>(10.0);
        let at = |ventilation| {
            effective_capacity(
                watts(200.0),
                watts(100.0),
                Ratio::new::<ratio>(ventilation),
                safety,
                &derating,
            )
        };
        let good = at(1.0);
        let poor = at(0.85);
        assert!(poor.effective < good.effective);
    }

    #[test]
    fn dynamic_derate_is_capped() {
        let capacity = effective_capacity(
            watts(100.0),
            watts(1000.0),
            Ratio::new::<ratio>(1.0),
            Ratio::new::<ratio>(0.0),
            &CapacityDerating::default(),
        );
        assert_relative_eq!(capacity.dynamic_derate.get::<ratio>(), 0.20, epsilon = 1e-12);
        assert_relative_eq!(capacity.effective.get::<watt>(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn unrated_cooler() {
        let capacity = effective_capacity(
            watts(0.0),
            watts(60.0),
            Ratio::new::<ratio>(1.0),
            Ratio::new::<percent>(10.0),
            &CapacityDerating::default(),
        );
        assert_eq!(capacity.effective, watts(0.0));

        let u = utilization(watts(60.0), capacity.effective);
        assert_relative_eq!(u.get::<percent>(), UNRATED_UTILIZATION_PERCENT, epsilon = 1e-9);
    }

    #[test]
    fn tiny_capacity_is_guarded() {
        let u = utilization(watts(60.0), watts(0.5));
        assert!(u.get::<percent>().is_finite());
        assert_relative_eq!(u.get::<percent>(), 6000.0, epsilon = 1e-9);
    }
}
