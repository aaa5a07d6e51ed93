use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, NonNegative, UnitInterval};

/// Character of the workload, scaling the dynamic part of the power draw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum WorkloadProfile {
    /// Desktop idle or light browsing.
    Idle,
    Office,
    Gaming,

    /// Sustained all-core rendering, such as Cinebench.
    #[default]
    SustainedBenchmark,

    /// Wide-vector stress loads, such as Prime95 with AVX.
    AvxHeavy,

    Custom(Constrained<f64, NonNegative>),
}

impl WorkloadProfile {
    /// Multiplier applied to the dynamic power term.
    #[must_use]
    pub fn factor(&self) -> f64 {
        match self {
            Self::Idle => 0.15,
            Self::Office => 0.30,
            Self::Gaming => 0.55,
            Self::SustainedBenchmark => 1.00,
            Self::AvxHeavy => 1.30,
            Self::Custom(factor) => *factor.as_ref(),
        }
    }
}

/// Airflow through the case, derating the cooler's capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Ventilation {
    #[default]
    Good,
    Moderate,
    Poor,
    Custom(Constrained<Ratio, UnitInterval>),
}

impl Ventilation {
    #[must_use]
    pub fn factor(&self) -> Ratio {
        match self {
            Self::Good => Ratio::new::<ratio>(1.00),
            Self::Moderate => Ratio::new::<ratio>(0.92),
            Self::Poor => Ratio::new::<ratio>(0.85),
            Self::Custom(factor) => *factor.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn heavier_profiles_have_larger_factors() {
        let presets = [
            WorkloadProfile::Idle,
            WorkloadProfile::Office,
            WorkloadProfile::Gaming,
            WorkloadProfile::SustainedBenchmark,
            WorkloadProfile::AvxHeavy,
        ];
        for pair in presets.windows(2) {
            assert!(pair[0].factor() < pair[1].factor());
        }
        assert_relative_eq!(WorkloadProfile::default().factor(), 1.0);
    }

    #[test]
    fn custom_factors_pass_through() {
        let profile = WorkloadProfile::Custom(NonNegative::new(0.8).unwrap());
        assert_relative_eq!(profile.factor(), 0.8);

        let vent = Ventilation::Custom(UnitInterval::new(Ratio::new::<ratio>(0.7)).unwrap());
        assert_relative_eq!(vent.factor().get::<ratio>(), 0.7);
    }

    #[test]
    fn worse_ventilation_lowers_factor() {
        assert!(Ventilation::Moderate.factor() < Ventilation::Good.factor());
        assert!(Ventilation::Poor.factor() < Ventilation::Moderate.factor());
    }
}
